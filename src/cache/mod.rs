//! # Memoization Cache Module
//!
//! Maps request fingerprints to completed report descriptors so that
//! repeated requests short-circuit the report producer.
//!
//! ## Architecture
//!
//! ```text
//! CacheProvider (enum)              <- Zero-cost dispatch, no vtable
//!   ├── Memory(MemoryReportCache)     <- Moka-backed, TTL + capacity bound
//!   └── NoOp(NoOpReportCache)         <- Always-miss, always-succeed fallback
//! ```
//!
//! The store is in-process and process-lifetime scoped; nothing survives a
//! restart. Entries are immutable once written, same-key writes are
//! last-writer-wins, and an expired entry is simply a miss that the next
//! dispatch overwrites.

pub mod errors;
pub mod provider;
pub mod providers;
pub mod traits;

pub use errors::{CacheError, CacheResult};
pub use provider::CacheProvider;
pub use providers::{MemoryReportCache, NoOpReportCache};
pub use traits::ReportCache;
