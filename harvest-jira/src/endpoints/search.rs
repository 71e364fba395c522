//! # Jira Issue Search
//!
//! Paginated search against the Jira search endpoint with the fixed field
//! projection the pipeline consumes. A page smaller than the requested size
//! is the last page.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::JiraClient;
use crate::consts::SEARCH_FIELDS;
use crate::models::{Issue, SearchResponse};

impl JiraClient {
  /// Fetch one page of issues matching a JQL query
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, jql: &str, start_at: usize, max_results: usize) -> Result<Vec<Issue>> {
    let url = format!("{}/rest/api/2/search", self.base_url);

    let response = self
      .authorize(self.client.get(&url))
      .query(&[
        ("jql", jql),
        ("startAt", start_at.to_string().as_str()),
        ("maxResults", max_results.to_string().as_str()),
        ("fields", SEARCH_FIELDS),
      ])
      .send()
      .await
      .context("Failed to search Jira issues")?;

    match response.status() {
      StatusCode::OK => {
        let page = response
          .json::<SearchResponse>()
          .await
          .context("Failed to parse Jira search response")?;
        Ok(page.issues)
      }
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Jira rejected the search query: {}",
        response.text().await.unwrap_or_default()
      )),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Start a paginated search over all issues matching `jql`
  pub fn search_pages<'a>(&'a self, jql: &'a str, page_size: usize) -> SearchPager<'a> {
    SearchPager {
      client: self,
      jql,
      page_size,
      start_at: 0,
      done: false,
    }
  }
}

/// Drives page-by-page issue search. Finite and not restartable: once a
/// short page comes back the pager yields `None` forever.
pub struct SearchPager<'a> {
  client: &'a JiraClient,
  jql: &'a str,
  page_size: usize,
  start_at: usize,
  done: bool,
}

impl SearchPager<'_> {
  /// Fetch the next page, or `None` after the final (short) page
  pub async fn next_page(&mut self) -> Result<Option<Vec<Issue>>> {
    if self.done {
      return Ok(None);
    }

    let page = self.client.search_issues(self.jql, self.start_at, self.page_size).await?;
    if page.len() < self.page_size {
      self.done = true;
    }
    self.start_at += self.page_size;
    Ok(Some(page))
  }
}
