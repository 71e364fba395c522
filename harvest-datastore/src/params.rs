//! Crawl configuration parameters.
//!
//! The surrounding batch driver hands each run a flat key→string mapping.
//! This module names the recognized keys and wraps the map with typed
//! accessors; missing keys read as the empty string.

use std::collections::BTreeMap;

/// Jira base URL (required)
pub const HOME: &str = "home";

/// Basic-auth username
pub const BASICAUTH_USERNAME: &str = "basicauth.username";
/// Basic-auth password or API token
pub const BASICAUTH_PASSWORD: &str = "basicauth.password";

/// OAuth1 consumer key
pub const OAUTH_CONSUMER_KEY: &str = "oauth.consumer_key";
/// OAuth1 RSA private key
pub const OAUTH_PRIVATE_KEY: &str = "oauth.private_key";
/// OAuth1 verifier
pub const OAUTH_SECRET: &str = "oauth.secret";
/// OAuth1 access token
pub const OAUTH_ACCESS_TOKEN: &str = "oauth.access_token";

/// JQL filter for the issue search; empty matches everything
pub const ISSUE_JQL: &str = "issue.jql";

/// Worker pool size (default 1, reserved for parallel per-issue processing)
pub const NUMBER_OF_THREADS: &str = "number_of_threads";

/// Pass-through flag consumed by the surrounding driver
pub const IGNORE_FOLDER: &str = "ignore_folder";
/// Pass-through flag consumed by the surrounding driver
pub const IGNORE_ERROR: &str = "ignore_error";
/// Pass-through flag consumed by the surrounding driver
pub const DEFAULT_PERMISSIONS: &str = "default_permissions";

/// Parameter map for one crawl run
#[derive(Clone, Debug, Default)]
pub struct CrawlParams {
  map: BTreeMap<String, String>,
}

impl CrawlParams {
  /// Wrap a parameter map
  pub const fn new(map: BTreeMap<String, String>) -> Self {
    Self { map }
  }

  /// Build a parameter map from string pairs
  pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
    Self {
      map: pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect(),
    }
  }

  /// Raw lookup; missing keys read as the empty string
  pub fn get(&self, key: &str) -> &str {
    self.map.get(key).map(String::as_str).unwrap_or("")
  }

  pub fn home(&self) -> &str {
    self.get(HOME)
  }

  pub fn username(&self) -> &str {
    self.get(BASICAUTH_USERNAME)
  }

  pub fn password(&self) -> &str {
    self.get(BASICAUTH_PASSWORD)
  }

  pub fn consumer_key(&self) -> &str {
    self.get(OAUTH_CONSUMER_KEY)
  }

  pub fn private_key(&self) -> &str {
    self.get(OAUTH_PRIVATE_KEY)
  }

  pub fn secret(&self) -> &str {
    self.get(OAUTH_SECRET)
  }

  pub fn access_token(&self) -> &str {
    self.get(OAUTH_ACCESS_TOKEN)
  }

  pub fn jql(&self) -> &str {
    self.get(ISSUE_JQL)
  }

  /// Worker thread count; absent, malformed, or zero values fall back to 1
  pub fn number_of_threads(&self) -> usize {
    match self.map.get(NUMBER_OF_THREADS) {
      Some(raw) => match raw.parse::<usize>() {
        Ok(count) if count > 0 => count,
        _ => {
          tracing::warn!("Invalid \"{NUMBER_OF_THREADS}\" value \"{raw}\", using 1");
          1
        }
      },
      None => 1,
    }
  }

  pub fn ignore_folder(&self) -> &str {
    self.get(IGNORE_FOLDER)
  }

  pub fn ignore_error(&self) -> &str {
    self.get(IGNORE_ERROR)
  }

  pub fn default_permissions(&self) -> &str {
    self.get(DEFAULT_PERMISSIONS)
  }
}

impl From<BTreeMap<String, String>> for CrawlParams {
  fn from(map: BTreeMap<String, String>) -> Self {
    Self::new(map)
  }
}
