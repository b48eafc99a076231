//! # Fingerprint Builder
//!
//! Derives the memoization key for a report request: the fixed-order
//! concatenation `kind ++ name ++ region ++ percentage` with no separators,
//! where absent optional fields contribute the empty string. The format is
//! kept separator-free for drop-in compatibility with existing cached
//! entries.
//!
//! Two consequences are intentional and documented rather than bugs:
//! `region=""` and an absent region are indistinguishable, and adjacent
//! fields can collide at their boundary (`name="ab"` with no region vs.
//! `name="a"` with region `"b"`).

use std::fmt;

use crate::models::ReportRequest;

/// Deterministic string key identifying a report request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the cache key for a request.
///
/// Pure and total: identical field values (including absent optionals)
/// always produce identical fingerprints.
pub fn build_key(request: &ReportRequest) -> Fingerprint {
    let percentage = request
        .percentage
        .map(|p| p.to_string())
        .unwrap_or_default();

    Fingerprint(format!(
        "{}{}{}{}",
        request.kind, request.name, request.region, percentage
    ))
}
