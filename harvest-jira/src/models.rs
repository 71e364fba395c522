use serde::Deserialize;

/// Represents Jira authentication credentials
#[derive(Clone, Debug)]
pub enum JiraAuth {
  /// Username and API token sent as HTTP basic auth
  Basic { username: String, api_token: String },
  /// OAuth1 credential material. Request signing belongs to the deployment's
  /// transport layer; the client forwards the fields in the standard `OAuth`
  /// authorization header.
  OAuth1 {
    consumer_key: String,
    private_key: String,
    verifier: String,
    access_token: String,
  },
}

/// Represents a Jira issue as returned by the search endpoint
#[derive(Debug, Deserialize)]
pub struct Issue {
  pub id: String,
  pub key: String,
  #[serde(default)]
  pub fields: IssueFields,
}

/// The subset of issue fields the pipeline consumes; anything else the
/// server returns is ignored, and absent fields read as `None`.
#[derive(Debug, Default, Deserialize)]
pub struct IssueFields {
  pub summary: Option<String>,
  pub description: Option<String>,
  pub updated: Option<String>,
}

/// Represents one page of search results
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  #[serde(default)]
  pub issues: Vec<Issue>,
}

/// Represents a single issue comment
#[derive(Debug, Deserialize)]
pub struct Comment {
  pub body: Option<String>,
}

/// Represents one page of issue comments
#[derive(Debug, Deserialize)]
pub struct CommentsResponse {
  #[serde(default)]
  pub comments: Vec<Comment>,
}
