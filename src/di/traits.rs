//! Trait definitions for dependency injection

use crate::core::RelayResult;
use crate::github::types::UpstreamResponse;
use async_trait::async_trait;

/// Trait for upstream GitHub queries
///
/// Every method performs exactly one upstream GET and returns the status and
/// parsed body as-is; a non-success status is not an error at this level.
/// Implementations should be thread-safe (Send + Sync).
#[async_trait]
pub trait GitHubProvider: Send + Sync {
    /// Search users by free-text query (first page of 5)
    async fn search_users(&self, query: &str) -> RelayResult<UpstreamResponse>;

    /// Look up a single user profile
    async fn get_user(&self, username: &str) -> RelayResult<UpstreamResponse>;

    /// List a user's repositories, most recently updated first (first page of 30)
    async fn list_user_repos(&self, username: &str) -> RelayResult<UpstreamResponse>;

    /// Look up a single repository
    async fn get_repo(&self, owner: &str, repo: &str) -> RelayResult<UpstreamResponse>;

    /// List a repository's latest commits (first page of 5)
    async fn list_repo_commits(&self, owner: &str, repo: &str) -> RelayResult<UpstreamResponse>;
}
