//! Service container for dependency injection

use super::traits::GitHubProvider;
use crate::config::Config;
use crate::core::RelayResult;
use crate::github::GitHubClient;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the immutable configuration and the upstream provider behind
/// `Arc`s, so cloning it per request is cheap. It doubles as the router
/// state of the relay service.
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<Config>,
    pub github: Arc<dyn GitHubProvider>,
}

impl ServiceContainer {
    /// Create a new service container with the production GitHub client
    ///
    /// # Errors
    ///
    /// Returns an error if the configured headers or token cannot be
    /// represented as HTTP header values.
    pub fn new(config: Config) -> RelayResult<Self> {
        let github = GitHubClient::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            github: Arc::new(github),
        })
    }

    /// Create a service container with a custom provider implementation
    ///
    /// This is primarily useful for testing, where a mock provider stands in
    /// for the upstream API.
    pub fn with_providers(config: Arc<Config>, github: Arc<dyn GitHubProvider>) -> Self {
        Self { config, github }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        self.config.as_ref()
    }

    /// Get the GitHub provider
    pub fn github(&self) -> &dyn GitHubProvider {
        self.github.as_ref()
    }
}
