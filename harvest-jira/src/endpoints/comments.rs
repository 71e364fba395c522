//! # Jira Issue Comments
//!
//! Paginated comment retrieval keyed by issue id, with the same short-page
//! termination rule as the issue search, plus aggregation of all comment
//! bodies into one text blob.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::{Comment, CommentsResponse};

impl JiraClient {
  /// Fetch one page of comments for an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn get_comments(&self, issue_id: &str, start_at: usize, max_results: usize) -> Result<Vec<Comment>> {
    let url = format!("{}/rest/api/2/issue/{}/comment", self.base_url, issue_id);

    let response = self
      .authorize(self.client.get(&url))
      .query(&[
        ("startAt", start_at.to_string().as_str()),
        ("maxResults", max_results.to_string().as_str()),
      ])
      .send()
      .await
      .context("Failed to fetch Jira comments")?;

    match response.status() {
      StatusCode::OK => {
        let page = response
          .json::<CommentsResponse>()
          .await
          .context("Failed to parse Jira comments")?;
        Ok(page.comments)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_id)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Fetch every comment page for an issue and concatenate the bodies in
  /// server order. Each body is preceded by a blank line, so the result is
  /// `\n\n<body1>\n\n<body2>...` and empty when there are no comments.
  pub async fn fetch_comment_text(&self, issue_id: &str, page_size: usize) -> Result<String> {
    let mut text = String::new();

    let mut start_at = 0;
    loop {
      let comments = self.get_comments(issue_id, start_at, page_size).await?;
      let count = comments.len();

      for comment in comments {
        text.push_str("\n\n");
        text.push_str(&comment.body.unwrap_or_default());
      }

      if count < page_size {
        break;
      }
      start_at += page_size;
    }

    Ok(text)
  }
}
