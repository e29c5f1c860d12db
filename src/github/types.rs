//! GitHub API type definitions

use crate::core::{RelayError, RelayResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single upstream answer: status plus parsed JSON body.
///
/// Created per call and handed straight to the caller; the relay forwards
/// `body` without reshaping it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `message` field GitHub puts in error bodies, if present
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Turn a non-success status into an error, naming `what` was requested
    pub fn into_success(self, what: &str) -> RelayResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self.error_message().unwrap_or("no message").to_string();
        if self.status == StatusCode::NOT_FOUND {
            Err(RelayError::NotFound(what.to_string()))
        } else {
            Err(RelayError::Upstream(format!(
                "HTTP {} for {}: {}",
                self.status.as_u16(),
                what,
                message
            )))
        }
    }

    /// Deserialize the body into a typed view
    pub fn parse<T: DeserializeOwned>(&self) -> RelayResult<T> {
        serde_json::from_value(self.body.clone()).map_err(RelayError::from)
    }
}

/// Response from the search users endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub total_count: u64,
    pub items: Vec<UserSummary>,
}

/// A user entry in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub login: String,
    pub html_url: String,
}

/// A user profile from the user lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<String>,
}

/// A repository entry in a user's repository list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub html_url: String,
}

/// Repository detail from the repository lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoDetail {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

/// An entry in a repository's commit list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEntry {
    pub sha: String,
    pub commit: CommitInfo,
    /// The linked GitHub account, absent when the author email is unknown
    pub author: Option<AccountRef>,
}

/// Git-level commit data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

/// Git author signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub date: Option<String>,
}

/// Minimal reference to a GitHub account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRef {
    pub login: String,
}

impl CommitEntry {
    /// First line of the commit message
    pub fn headline(&self) -> &str {
        self.commit.message.lines().next().unwrap_or("")
    }

    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(self.sha.as_str())
    }

    /// Display name of the author, preferring the git signature
    pub fn author_name(&self) -> &str {
        self.commit
            .author
            .as_ref()
            .map(|a| a.name.as_str())
            .or_else(|| self.author.as_ref().map(|a| a.login.as_str()))
            .unwrap_or("Unknown")
    }
}
