//! Crawl driver.
//!
//! One run: resolve credentials, page through the issue search, and push one
//! normalized record per issue into the sink. A record the sink rejects is
//! logged and skipped; configuration errors stop the run before any fetch
//! and transport errors abort it mid-flight.

use anyhow::{Context, Result};
use harvest_jira::{Issue, JiraClient};

use crate::params::CrawlParams;
use crate::record::{self, NormalizedRecord, RecordSink, StoreError};
use crate::{auth, extract};

/// Issues requested per search page, and comments per comment page
pub const ISSUE_MAX_RESULTS: usize = 50;

/// Totals for one finished run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrawlSummary {
  pub pages: usize,
  pub issues: usize,
  pub stored: usize,
  pub skipped: usize,
}

/// What became of a single issue
enum IssueOutcome {
  Stored,
  Skipped { reason: String },
}

/// Run a full crawl described by `params`, storing one record per issue.
///
/// `defaults` seeds every record; the derived fields overlay it. Partial
/// completion is expected: the summary reports how many issues were stored
/// versus skipped.
pub async fn run(params: &CrawlParams, defaults: &NormalizedRecord, sink: &mut dyn RecordSink) -> Result<CrawlSummary> {
  let (home, jira_auth) = match auth::resolve(params) {
    Ok(resolved) => resolved,
    Err(e) => {
      tracing::warn!("{e}");
      return Err(e.into());
    }
  };

  // Sequential for now; the fetch loop is inherently ordered and per-issue
  // work has no cross-issue dependency to justify a pool yet.
  let threads = params.number_of_threads();
  tracing::debug!("Worker thread pool size: {threads} (processing sequentially)");

  let client = JiraClient::new(&home, jira_auth);
  let mut pager = client.search_pages(params.jql(), ISSUE_MAX_RESULTS);
  let mut summary = CrawlSummary::default();

  while let Some(page) = pager.next_page().await? {
    summary.pages += 1;
    for issue in &page {
      summary.issues += 1;
      match process_issue(&client, params, defaults, &home, issue, sink).await? {
        IssueOutcome::Stored => summary.stored += 1,
        IssueOutcome::Skipped { reason } => {
          tracing::debug!("Issue {} skipped: {reason}", issue.key);
          summary.skipped += 1;
        }
      }
    }
  }

  tracing::debug!(
    "Crawl finished: {} issues over {} pages, {} stored, {} skipped",
    summary.issues,
    summary.pages,
    summary.stored,
    summary.skipped
  );
  Ok(summary)
}

/// Fetch comments, build the record, and store it. Sink rejections come back
/// as a skip outcome; transport failures bubble up.
async fn process_issue(
  client: &JiraClient,
  params: &CrawlParams,
  defaults: &NormalizedRecord,
  jira_home: &str,
  issue: &Issue,
  sink: &mut dyn RecordSink,
) -> Result<IssueOutcome> {
  let fields = extract::extract(issue, jira_home);
  let comments = client
    .fetch_comment_text(&issue.id, ISSUE_MAX_RESULTS)
    .await
    .with_context(|| format!("Failed to fetch comments for issue {}", issue.key))?;
  let content = format!("{}{}", fields.description, comments);
  let record = record::build_record(defaults, &fields, &content);

  match sink.store(params, &record) {
    Ok(()) => Ok(IssueOutcome::Stored),
    Err(StoreError::Recoverable(reason)) => {
      tracing::warn!("Crawling access failure at {record:?}: {reason}");
      Ok(IssueOutcome::Skipped { reason })
    }
    Err(StoreError::Fatal(e)) => Err(e.context(format!("Failed to store record for issue {}", issue.key))),
  }
}
