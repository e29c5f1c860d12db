//! GitHub API client implementation

use crate::config::Config;
use crate::core::{RelayError, RelayResult};
use crate::di::traits::GitHubProvider;
use crate::github::endpoints;
use crate::github::types::UpstreamResponse;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use tracing::debug;

/// GitHub API client
///
/// One attempt per call: no retries, no timeout and no rate limiting.
/// Network failures and non-JSON bodies both surface as errors.
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client with the fixed header set from `config`
    pub fn new(config: &Config) -> RelayResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| RelayError::Config(format!("Invalid user_agent: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_str(&config.accept)
                .map_err(|e| RelayError::Config(format!("Invalid accept header: {}", e)))?,
        );

        if let Some(ref token) = config.token {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| RelayError::Config(format!("Invalid GitHub token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// GET `path_and_query` relative to the API base URL
    pub async fn fetch(&self, path_and_query: &str) -> RelayResult<UpstreamResponse> {
        let url = format!("{}{}", self.api_url, path_and_query);
        debug!(%url, "GitHub API request");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body = serde_json::from_slice(&bytes).map_err(|e| {
            RelayError::Upstream(format!(
                "Failed to parse GitHub API response (HTTP {}): {}",
                status.as_u16(),
                e
            ))
        })?;

        debug!(%url, status = status.as_u16(), "GitHub API response");
        Ok(UpstreamResponse::new(status, body))
    }
}

#[async_trait]
impl GitHubProvider for GitHubClient {
    async fn search_users(&self, query: &str) -> RelayResult<UpstreamResponse> {
        self.fetch(&endpoints::search_users_path(query)).await
    }

    async fn get_user(&self, username: &str) -> RelayResult<UpstreamResponse> {
        self.fetch(&endpoints::user_path(username)).await
    }

    async fn list_user_repos(&self, username: &str) -> RelayResult<UpstreamResponse> {
        self.fetch(&endpoints::user_repos_path(username)).await
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> RelayResult<UpstreamResponse> {
        self.fetch(&endpoints::repo_path(owner, repo)).await
    }

    async fn list_repo_commits(&self, owner: &str, repo: &str) -> RelayResult<UpstreamResponse> {
        self.fetch(&endpoints::repo_commits_path(owner, repo)).await
    }
}
