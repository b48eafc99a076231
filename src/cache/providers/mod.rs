//! Cache provider implementations

pub mod memory;
pub mod noop;

pub use memory::MemoryReportCache;
pub use noop::NoOpReportCache;
