//! Constants for the harvest-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("harvest/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Field projection requested from the search endpoint; the pipeline
/// consumes nothing beyond these.
pub const SEARCH_FIELDS: &str = "summary,description,updated";
