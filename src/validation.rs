//! Input validation for report requests.
//!
//! Validation resolves entirely at the gateway boundary: a rejected request
//! never reaches the dispatcher, and a request that passes here can be
//! fingerprinted and dispatched without further checks.

use serde::{Deserialize, Serialize};

use crate::models::RawReportQuery;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered validation outcome for one request.
///
/// Produced once per request and consumed once by the gateway; never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate raw query fields for a report request.
///
/// Checks run in a fixed order so error lists are deterministic: `name`
/// first, then `percentage`. `region` is free-form and cannot fail.
pub fn validate_report_query(raw: &RawReportQuery) -> ValidationReport {
    let mut report = ValidationReport::default();

    match raw.name.as_deref() {
        None | Some("") => {
            report
                .errors
                .push(FieldError::new("name", "name is required and must not be empty"));
        }
        Some(_) => {}
    }

    if let Some(percentage) = raw.percentage.as_deref().filter(|p| !p.is_empty()) {
        match percentage.parse::<i64>() {
            Ok(value) if (0..=100).contains(&value) => {}
            Ok(value) => {
                report.errors.push(FieldError::new(
                    "percentage",
                    format!("percentage must be between 0 and 100, got {value}"),
                ));
            }
            Err(_) => {
                report.errors.push(FieldError::new(
                    "percentage",
                    format!("percentage must be an integer, got '{percentage}'"),
                ));
            }
        }
    }

    report
}
