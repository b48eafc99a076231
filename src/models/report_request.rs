//! # Report Request Model
//!
//! The typed request flowing through the gateway, plus the explicit parse
//! step that turns the loosely typed HTTP query dictionary into it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{validate_report_query, ValidationReport};

/// Which report family a request targets.
///
/// Both kinds share an identical shape and flow; the tag only scopes what the
/// `name` field identifies (a species vs. a resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    Species,
    Resources,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Species => write!(f, "Species"),
            ReportKind::Resources => write!(f, "Resources"),
        }
    }
}

/// Raw query fields exactly as they arrived, before validation.
///
/// Absent and empty are equivalent downstream; required-field checks happen
/// in [`validate_report_query`], never here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawReportQuery {
    pub name: Option<String>,
    pub region: Option<String>,
    pub percentage: Option<String>,
}

impl RawReportQuery {
    /// Extract the known fields from an HTTP query dictionary.
    ///
    /// Unknown keys are ignored; nothing here can fail.
    pub fn from_query_map(query: &HashMap<String, String>) -> Self {
        Self {
            name: query.get("name").cloned(),
            region: query.get("region").cloned(),
            percentage: query.get("percentage").cloned(),
        }
    }
}

/// A validated report request. Immutable once built; `kind` is fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub kind: ReportKind,
    /// Subject identity; guaranteed non-empty by construction.
    pub name: String,
    /// Optional region filter; an absent field is stored as the empty string.
    pub region: String,
    /// Optional percentage filter, 0-100.
    pub percentage: Option<u8>,
}

impl ReportRequest {
    /// Build a validated request from raw query fields.
    ///
    /// This is the only constructor crossing the trust boundary: it fails
    /// closed, returning the full ordered validation report on any problem.
    pub fn from_query(kind: ReportKind, raw: &RawReportQuery) -> Result<Self, ValidationReport> {
        let report = validate_report_query(raw);
        if !report.is_valid() {
            return Err(report);
        }

        let percentage = raw
            .percentage
            .as_deref()
            .filter(|p| !p.is_empty())
            .and_then(|p| p.parse::<u8>().ok());

        Ok(Self {
            kind,
            name: raw.name.clone().unwrap_or_default(),
            region: raw.region.clone().unwrap_or_default(),
            percentage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: Option<&str>, region: Option<&str>, percentage: Option<&str>) -> RawReportQuery {
        RawReportQuery {
            name: name.map(String::from),
            region: region.map(String::from),
            percentage: percentage.map(String::from),
        }
    }

    #[test]
    fn test_from_query_map_picks_known_fields() {
        let mut query = HashMap::new();
        query.insert("name".to_string(), "Lion".to_string());
        query.insert("percentage".to_string(), "10".to_string());
        query.insert("unknown".to_string(), "ignored".to_string());

        let parsed = RawReportQuery::from_query_map(&query);
        assert_eq!(parsed.name.as_deref(), Some("Lion"));
        assert_eq!(parsed.region, None);
        assert_eq!(parsed.percentage.as_deref(), Some("10"));
    }

    #[test]
    fn test_from_query_builds_validated_request() {
        let request =
            ReportRequest::from_query(ReportKind::Species, &raw(Some("Lion"), Some("Africa"), Some("10")))
                .unwrap();

        assert_eq!(request.kind, ReportKind::Species);
        assert_eq!(request.name, "Lion");
        assert_eq!(request.region, "Africa");
        assert_eq!(request.percentage, Some(10));
    }

    #[test]
    fn test_from_query_absent_optionals_become_empty() {
        let request =
            ReportRequest::from_query(ReportKind::Resources, &raw(Some("Coal"), None, None)).unwrap();

        assert_eq!(request.region, "");
        assert_eq!(request.percentage, None);
    }

    #[test]
    fn test_from_query_rejects_missing_name() {
        let result = ReportRequest::from_query(ReportKind::Species, &raw(None, Some("Asia"), None));
        let report = result.unwrap_err();
        assert!(report.errors.iter().any(|e| e.field == "name"));
    }

    #[test]
    fn test_empty_region_and_absent_region_are_equivalent() {
        let absent =
            ReportRequest::from_query(ReportKind::Species, &raw(Some("Lion"), None, None)).unwrap();
        let empty =
            ReportRequest::from_query(ReportKind::Species, &raw(Some("Lion"), Some(""), None))
                .unwrap();
        assert_eq!(absent, empty);
    }

    #[test]
    fn test_report_kind_display() {
        assert_eq!(ReportKind::Species.to_string(), "Species");
        assert_eq!(ReportKind::Resources.to_string(), "Resources");
    }
}
