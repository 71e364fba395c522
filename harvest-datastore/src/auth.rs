//! Credential resolution.
//!
//! Decides the Jira home and credential variant for a run before any network
//! traffic happens. Basic auth wins when both of its fields are present;
//! otherwise all four OAuth1 fields must be set. Anything else is a
//! configuration error and the run never starts.

use harvest_jira::JiraAuth;
use thiserror::Error;

use crate::params::{self, CrawlParams};

/// Configuration failures that abort a run before any fetch
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("parameter \"{}\" is required", params::HOME)]
  MissingHome,
  #[error(
    "parameter \"{}\" and \"{}\" or \"{}\", \"{}\", \"{}\" and \"{}\" are required",
    params::BASICAUTH_USERNAME,
    params::BASICAUTH_PASSWORD,
    params::OAUTH_CONSUMER_KEY,
    params::OAUTH_PRIVATE_KEY,
    params::OAUTH_SECRET,
    params::OAUTH_ACCESS_TOKEN
  )]
  IncompleteCredentials,
}

/// Resolve the Jira home URL and credential variant from the parameter map
pub fn resolve(params: &CrawlParams) -> Result<(String, JiraAuth), ConfigError> {
  let home = params.home();
  if home.is_empty() {
    return Err(ConfigError::MissingHome);
  }

  let username = params.username();
  let password = params.password();
  if !username.is_empty() && !password.is_empty() {
    return Ok((
      home.to_string(),
      JiraAuth::Basic {
        username: username.to_string(),
        api_token: password.to_string(),
      },
    ));
  }

  let consumer_key = params.consumer_key();
  let private_key = params.private_key();
  let verifier = params.secret();
  let access_token = params.access_token();
  if consumer_key.is_empty() || private_key.is_empty() || verifier.is_empty() || access_token.is_empty() {
    return Err(ConfigError::IncompleteCredentials);
  }

  Ok((
    home.to_string(),
    JiraAuth::OAuth1 {
      consumer_key: consumer_key.to_string(),
      private_key: private_key.to_string(),
      verifier: verifier.to_string(),
      access_token: access_token.to_string(),
    },
  ))
}
