//! # Jira API Endpoints
//!
//! Endpoint implementations for the read path the ingestion pipeline uses:
//! paginated issue search and per-issue comment retrieval.

pub mod comments;
pub mod search;
