//! Mock implementations of service traits for testing

use super::traits::GitHubProvider;
use crate::core::{RelayError, RelayResult};
use crate::github::endpoints;
use crate::github::types::UpstreamResponse;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock GitHub provider for testing
///
/// Responses are keyed by the upstream path the real client would request.
/// Unknown paths answer like GitHub does, with a 404 and a `message` body.
///
/// # Example
///
/// ```
/// use hubrelay::di::mocks::MockGitHubProvider;
/// use hubrelay::di::GitHubProvider;
/// use serde_json::json;
///
/// # async fn example() {
/// let github = MockGitHubProvider::new().with_user("octocat", json!({"login": "octocat"}));
/// let resp = github.get_user("octocat").await.unwrap();
///
/// assert!(resp.is_success());
/// assert_eq!(github.call_count(), 1);
/// # }
/// ```
#[derive(Clone, Default)]
pub struct MockGitHubProvider {
    responses: Arc<Mutex<HashMap<String, UpstreamResponse>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGitHubProvider {
    /// Create a new mock with no canned responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the upstream were unreachable
    pub fn failing(message: &str) -> Self {
        let mock = Self::new();
        *mock.failure.lock().unwrap() = Some(message.to_string());
        mock
    }

    /// Register a response for an upstream path
    pub fn with_response(self, path: String, response: UpstreamResponse) -> Self {
        self.responses.lock().unwrap().insert(path, response);
        self
    }

    pub fn with_search(self, query: &str, body: Value) -> Self {
        self.with_response(endpoints::search_users_path(query), UpstreamResponse::ok(body))
    }

    pub fn with_user(self, username: &str, body: Value) -> Self {
        self.with_response(endpoints::user_path(username), UpstreamResponse::ok(body))
    }

    pub fn with_user_repos(self, username: &str, body: Value) -> Self {
        self.with_response(endpoints::user_repos_path(username), UpstreamResponse::ok(body))
    }

    pub fn with_repo(self, owner: &str, repo: &str, body: Value) -> Self {
        self.with_response(endpoints::repo_path(owner, repo), UpstreamResponse::ok(body))
    }

    pub fn with_commits(self, owner: &str, repo: &str, body: Value) -> Self {
        self.with_response(endpoints::repo_commits_path(owner, repo), UpstreamResponse::ok(body))
    }

    /// Number of upstream calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Upstream paths requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, path: String) -> RelayResult<UpstreamResponse> {
        self.calls.lock().unwrap().push(path.clone());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(RelayError::Upstream(message));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .unwrap_or_else(|| {
                UpstreamResponse::new(
                    StatusCode::NOT_FOUND,
                    json!({
                        "message": "Not Found",
                        "documentation_url": "https://docs.github.com/rest",
                    }),
                )
            }))
    }
}

#[async_trait]
impl GitHubProvider for MockGitHubProvider {
    async fn search_users(&self, query: &str) -> RelayResult<UpstreamResponse> {
        self.respond(endpoints::search_users_path(query))
    }

    async fn get_user(&self, username: &str) -> RelayResult<UpstreamResponse> {
        self.respond(endpoints::user_path(username))
    }

    async fn list_user_repos(&self, username: &str) -> RelayResult<UpstreamResponse> {
        self.respond(endpoints::user_repos_path(username))
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> RelayResult<UpstreamResponse> {
        self.respond(endpoints::repo_path(owner, repo))
    }

    async fn list_repo_commits(&self, owner: &str, repo: &str) -> RelayResult<UpstreamResponse> {
        self.respond(endpoints::repo_commits_path(owner, repo))
    }
}
