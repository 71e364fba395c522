//! # Jira Datastore
//!
//! Turns Jira issues into normalized documents for a search index. One run
//! resolves credentials from a parameter map, pages through an issue search,
//! aggregates each issue's comments, and pushes one record per issue into a
//! caller-supplied sink. A record the sink rejects is logged and skipped;
//! configuration and transport failures abort the run.
//!
//! The crate is a library with no CLI surface: a surrounding batch driver
//! owns configuration loading, subscriber setup, and the index writer behind
//! the [`RecordSink`] trait.

pub mod auth;
pub mod crawl;
pub mod extract;
pub mod params;
pub mod record;

// Re-export the run entry point and its surroundings
pub use auth::ConfigError;
pub use crawl::{CrawlSummary, ISSUE_MAX_RESULTS, run};
pub use params::CrawlParams;
pub use record::{NormalizedRecord, RecordSink, StoreError};
