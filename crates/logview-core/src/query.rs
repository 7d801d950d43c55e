//! Query engine — filters a snapshot of the log collection and orders it for
//! display.
//!
//! [`apply`] is a pure function of (collection, filter): no caching, no
//! incremental index, invoked fresh on every query.

use crate::error::QueryError;
use crate::types::LogRecord;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Optional per-field criteria used to select a subset of records.
///
/// Absent or empty-string criteria impose no constraint. The serde field
/// names match the query-string parameters accepted by the HTTP surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogFilter {
    pub level: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "resourceId")]
    pub resource_id: Option<String>,
    #[serde(rename = "traceId")]
    pub trace_id: Option<String>,
    #[serde(rename = "spanId")]
    pub span_id: Option<String>,
    pub commit: Option<String>,
    /// Inclusive lower bound, RFC 3339.
    pub timestamp_start: Option<String>,
    /// Inclusive upper bound, RFC 3339.
    pub timestamp_end: Option<String>,
}

/// Filter `records` and sort the survivors by timestamp descending.
///
/// Each textual criterion is a case-insensitive substring match; this holds
/// even for `level`, so a filter value of `"err"` matches records at level
/// `error`. All active criteria must pass (logical AND). The sort is stable,
/// so records with equal timestamps keep their input order.
///
/// An unparseable `timestamp_start` or `timestamp_end` fails the whole query;
/// there is no partial-result fallback.
pub fn apply(records: Vec<LogRecord>, filter: &LogFilter) -> Result<Vec<LogRecord>, QueryError> {
    let start = parse_bound(filter.timestamp_start.as_deref(), "timestamp_start")?;
    let end = parse_bound(filter.timestamp_end.as_deref(), "timestamp_end")?;

    let mut matched: Vec<LogRecord> = records
        .into_iter()
        .filter(|record| matches(record, filter, start, end))
        .collect();

    matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(matched)
}

fn matches(
    record: &LogRecord,
    filter: &LogFilter,
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
) -> bool {
    contains_ignore_case(record.level.as_str(), filter.level.as_deref())
        && contains_ignore_case(&record.message, filter.message.as_deref())
        && contains_ignore_case(&record.resource_id, filter.resource_id.as_deref())
        && contains_ignore_case(&record.trace_id, filter.trace_id.as_deref())
        && contains_ignore_case(&record.span_id, filter.span_id.as_deref())
        && contains_ignore_case(&record.commit, filter.commit.as_deref())
        && start.is_none_or(|s| record.timestamp >= s)
        && end.is_none_or(|e| record.timestamp <= e)
}

/// An absent or empty filter value passes unconditionally; otherwise the field
/// value must contain it, ignoring case. An empty field value therefore fails
/// any non-empty filter value.
fn contains_ignore_case(field: &str, filter: Option<&str>) -> bool {
    match filter {
        None | Some("") => true,
        Some(wanted) => field.to_lowercase().contains(&wanted.to_lowercase()),
    }
}

fn parse_bound(
    raw: Option<&str>,
    which: &'static str,
) -> Result<Option<DateTime<FixedOffset>>, QueryError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(Some)
            .map_err(|source| QueryError::InvalidBound {
                which,
                value: value.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_filters_match_everything() {
        assert!(contains_ignore_case("connection reset", None));
        assert!(contains_ignore_case("connection reset", Some("")));
        assert!(contains_ignore_case("", None));
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ignore_case("Connection Reset", Some("reset")));
        assert!(contains_ignore_case("connection reset", Some("RESET")));
        assert!(!contains_ignore_case("connection reset", Some("refused")));
    }

    #[test]
    fn empty_field_fails_non_empty_filter() {
        assert!(!contains_ignore_case("", Some("x")));
    }

    #[test]
    fn bad_bound_is_a_query_error() {
        let filter = LogFilter {
            timestamp_start: Some("not-a-date".to_string()),
            ..Default::default()
        };
        let err = apply(Vec::new(), &filter).unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidBound {
                which: "timestamp_start",
                ..
            }
        ));
    }

    #[test]
    fn filter_deserializes_from_query_string_names() {
        let filter: LogFilter = serde_json::from_str(
            r#"{"resourceId": "server-1", "traceId": "t1", "timestamp_start": "2024-03-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(filter.resource_id.as_deref(), Some("server-1"));
        assert_eq!(filter.trace_id.as_deref(), Some("t1"));
        assert_eq!(
            filter.timestamp_start.as_deref(),
            Some("2024-03-01T00:00:00Z")
        );
    }
}
