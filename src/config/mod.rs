use crate::core::path::{config_file, ensure_dir};
use crate::core::{RelayError, RelayResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable holding the optional GitHub credential
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Environment variable overriding the upstream API base URL
pub const API_URL_ENV: &str = "HUBRELAY_API_URL";
/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";
/// Environment variable overriding the bind address
pub const BIND_ENV: &str = "HUBRELAY_BIND";

/// Relay configuration.
///
/// Read once at startup and shared read-only afterwards; nothing mutates it
/// while requests are in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the upstream REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Address the relay listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the relay listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// `User-Agent` sent with every upstream request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `Accept` media type sent with every upstream request
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Optional credential attached as a bearer token.
    ///
    /// `GITHUB_TOKEN` takes precedence over the file value. Never written
    /// back out when the config is saved.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// Forward the upstream status code on every route instead of only on
    /// the user lookup route
    #[serde(default)]
    pub forward_upstream_status: bool,

    /// Origins allowed by CORS; empty allows any origin
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_user_agent() -> String {
    "GitHub-Browser-App".to_string()
}

fn default_accept() -> String {
    "application/vnd.github.v3+json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            bind_address: default_bind_address(),
            port: default_port(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            token: None,
            forward_upstream_status: false,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load the configuration and apply environment overrides.
    ///
    /// An explicit `path` must exist. Without one, the platform config file
    /// is used when present and built-in defaults otherwise:
    /// - Windows: %APPDATA%\hubrelay\config.yaml
    /// - Linux: ~/.config/hubrelay/config.yaml
    /// - macOS: ~/Library/Application Support/hubrelay/config.yaml
    pub fn load(path: Option<&Path>) -> RelayResult<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(RelayError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match config_file() {
                Ok(default_path) if default_path.exists() => Self::from_file(&default_path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a YAML config file without applying overrides
    pub fn from_file(path: &Path) -> RelayResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            RelayError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> RelayResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(TOKEN_ENV) {
            self.token = Some(token);
        }
        // An empty credential means anonymous access
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.token = None;
        }

        if let Some(api_url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            self.api_url = api_url;
        }
        self.api_url = self.api_url.trim_end_matches('/').to_string();

        if let Some(bind) = lookup(BIND_ENV).filter(|v| !v.is_empty()) {
            self.bind_address = bind;
        }

        if let Some(port) = lookup(PORT_ENV).filter(|v| !v.is_empty()) {
            self.port = port.parse().map_err(|e| {
                RelayError::Config(format!("Invalid {} '{}': {}", PORT_ENV, port, e))
            })?;
        }

        Ok(())
    }

    /// Save the config as YAML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> RelayResult<()> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| RelayError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the listen address
    pub fn socket_addr(&self) -> RelayResult<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| {
                RelayError::Config(format!(
                    "Invalid bind address '{}:{}': {}",
                    self.bind_address, self.port, e
                ))
            })
    }

    /// Whether a credential will be sent upstream
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}
