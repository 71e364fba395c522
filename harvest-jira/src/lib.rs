//! # Jira Read Client
//!
//! Authenticated read-only access to the Jira REST API: paginated issue
//! search and per-issue comment retrieval, the two calls the harvest
//! ingestion pipeline consumes. Not a general Jira client.

mod client;
mod consts;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::JiraClient;
// Re-export the search pager
pub use endpoints::search::SearchPager;
// Re-export models
pub use models::{Comment, Issue, IssueFields, JiraAuth};
