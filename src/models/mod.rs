//! Report request types.

pub mod report_request;

pub use report_request::{RawReportQuery, ReportKind, ReportRequest};
