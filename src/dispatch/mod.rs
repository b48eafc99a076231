//! Cache-aware job dispatch.

pub mod dispatcher;

pub use dispatcher::{DispatchError, JobDispatcher};
