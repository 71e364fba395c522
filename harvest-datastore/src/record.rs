//! Normalized records and the sink boundary.
//!
//! A record is the caller-supplied default field map with the derived issue
//! fields overlaid. The sink is the external index writer; only its
//! recoverable "crawling access" failures are handled per issue, everything
//! else aborts the run.

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use serde_json::Value;
use thiserror::Error;

use crate::extract::ExtractedFields;
use crate::params::CrawlParams;

/// Document handed to the index sink
pub type NormalizedRecord = BTreeMap<String, Value>;

/// Record key for the canonical issue browse URL
pub const URL: &str = "url";
/// Record key for the issue summary
pub const TITLE: &str = "title";
/// Record key for description plus concatenated comments
pub const CONTENT: &str = "content";
/// Record key for the update timestamp; absent when the raw value failed to parse
pub const LAST_MODIFIED: &str = "last_modified";

/// Failures raised by a sink
#[derive(Debug, Error)]
pub enum StoreError {
  /// The record was rejected in a way that only affects this record; the
  /// crawl logs it and moves on to the next issue
  #[error("record rejected: {0}")]
  Recoverable(String),
  /// Anything else aborts the run
  #[error(transparent)]
  Fatal(#[from] anyhow::Error),
}

/// Destination for normalized records (the search-index writer)
pub trait RecordSink {
  /// Persist one record. The parameter map rides along so the sink can see
  /// the run's pass-through flags.
  fn store(&mut self, params: &CrawlParams, record: &NormalizedRecord) -> Result<(), StoreError>;
}

/// Assemble the sink record: defaults first, derived fields on top. The
/// url and title keys are always written; last_modified only when the
/// timestamp parsed.
pub fn build_record(defaults: &NormalizedRecord, fields: &ExtractedFields, content: &str) -> NormalizedRecord {
  let mut record = defaults.clone();
  record.insert(URL.to_string(), Value::String(fields.url.clone()));
  record.insert(TITLE.to_string(), Value::String(fields.title.clone()));
  record.insert(CONTENT.to_string(), Value::String(content.to_string()));
  if let Some(timestamp) = fields.last_modified {
    record.insert(
      LAST_MODIFIED.to_string(),
      Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
  }
  record
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;

  fn sample_fields(last_modified: Option<chrono::DateTime<Utc>>) -> ExtractedFields {
    ExtractedFields {
      url: "https://jira.example.com/browse/ABC-42".to_string(),
      title: "A bug".to_string(),
      description: "It breaks".to_string(),
      last_modified,
    }
  }

  #[test]
  fn test_build_record_overlays_defaults() {
    let mut defaults = NormalizedRecord::new();
    defaults.insert("mime_type".to_string(), Value::String("text/plain".to_string()));
    defaults.insert("title".to_string(), Value::String("placeholder".to_string()));

    let timestamp = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(678);
    let record = build_record(&defaults, &sample_fields(Some(timestamp)), "It breaks\n\na");

    // Defaults survive underneath, derived fields win on conflict.
    assert_eq!(record["mime_type"], Value::String("text/plain".to_string()));
    assert_eq!(record["title"], Value::String("A bug".to_string()));
    assert_eq!(record["url"], Value::String("https://jira.example.com/browse/ABC-42".to_string()));
    assert_eq!(record["content"], Value::String("It breaks\n\na".to_string()));
    assert_eq!(
      record["last_modified"],
      Value::String("2020-01-02T03:04:05.678Z".to_string())
    );
  }

  #[test]
  fn test_build_record_omits_unparsed_timestamp() {
    let record = build_record(&NormalizedRecord::new(), &sample_fields(None), "");

    assert!(!record.contains_key(LAST_MODIFIED));
    assert!(record.contains_key(URL));
    assert!(record.contains_key(TITLE));
  }

  #[test]
  fn test_build_record_title_never_absent() {
    let fields = ExtractedFields {
      url: "https://jira.example.com/browse/ABC-43".to_string(),
      title: String::new(),
      description: String::new(),
      last_modified: None,
    };
    let record = build_record(&NormalizedRecord::new(), &fields, "");

    assert_eq!(record[TITLE], Value::String(String::new()));
  }
}
