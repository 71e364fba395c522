//! Field extraction from raw issues.
//!
//! Pure issue → document-field mapping. Absent summary and description read
//! as empty strings; an unparseable update timestamp drops the last-modified
//! field with a warning rather than failing the record.

use chrono::{DateTime, Utc};
use harvest_jira::Issue;

/// Document fields derived from a single issue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedFields {
  pub url: String,
  pub title: String,
  pub description: String,
  pub last_modified: Option<DateTime<Utc>>,
}

/// Derive document fields from an issue
pub fn extract(issue: &Issue, jira_home: &str) -> ExtractedFields {
  ExtractedFields {
    url: issue_view_url(jira_home, &issue.key),
    title: issue.fields.summary.clone().unwrap_or_default(),
    description: issue.fields.description.clone().unwrap_or_default(),
    last_modified: issue.fields.updated.as_deref().and_then(parse_updated),
  }
}

/// Canonical browse URL for an issue. Issue keys are URL-safe already, so
/// this is a direct join with no encoding.
pub fn issue_view_url(jira_home: &str, key: &str) -> String {
  format!("{jira_home}/browse/{key}")
}

/// Parse Jira's `updated` timestamp (millisecond precision with a trailing
/// zone offset, either `Z` or `+0000` style) into UTC
pub fn parse_updated(raw: &str) -> Option<DateTime<Utc>> {
  let parsed = DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.3f%z"));

  match parsed {
    Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
    Err(e) => {
      tracing::warn!("Failed to parse issue timestamp \"{raw}\": {e}");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn issue_from_json(json: serde_json::Value) -> Issue {
    serde_json::from_value(json).unwrap()
  }

  #[test]
  fn test_extract_all_fields() {
    let issue = issue_from_json(serde_json::json!({
        "id": "10000",
        "key": "ABC-42",
        "fields": {
            "summary": "A bug",
            "description": "It breaks",
            "updated": "2020-01-02T03:04:05.678Z"
        }
    }));

    let fields = extract(&issue, "https://jira.example.com");

    assert_eq!(fields.url, "https://jira.example.com/browse/ABC-42");
    assert_eq!(fields.title, "A bug");
    assert_eq!(fields.description, "It breaks");
    let expected = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(678);
    assert_eq!(fields.last_modified, Some(expected));
  }

  #[test]
  fn test_extract_defaults_for_missing_fields() {
    let issue = issue_from_json(serde_json::json!({
        "id": "10001",
        "key": "ABC-43",
        "fields": {}
    }));

    let fields = extract(&issue, "https://jira.example.com");

    assert_eq!(fields.title, "");
    assert_eq!(fields.description, "");
    assert_eq!(fields.last_modified, None);
  }

  #[test]
  fn test_extract_is_idempotent() {
    let issue = issue_from_json(serde_json::json!({
        "id": "10000",
        "key": "ABC-42",
        "fields": {
            "summary": "A bug",
            "description": "It breaks",
            "updated": "2020-01-02T03:04:05.678+0900"
        }
    }));

    assert_eq!(
      extract(&issue, "https://jira.example.com"),
      extract(&issue, "https://jira.example.com")
    );
  }

  #[test]
  fn test_parse_updated_numeric_offset() {
    // Jira's own format is a numeric offset without a colon.
    let parsed = parse_updated("2020-01-02T12:04:05.678+0900").unwrap();
    assert_eq!(parsed.to_rfc3339(), "2020-01-02T03:04:05.678+00:00");
  }

  #[test]
  fn test_parse_updated_malformed_yields_none() {
    assert_eq!(parse_updated("not-a-date"), None);
    assert_eq!(parse_updated(""), None);
  }

  #[test]
  fn test_issue_view_url_direct_join() {
    assert_eq!(
      issue_view_url("https://jira.example.com", "ABC-42"),
      "https://jira.example.com/browse/ABC-42"
    );
  }
}
