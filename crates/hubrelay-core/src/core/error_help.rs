//! Human-friendly rendering of errors with actionable suggestions.

use super::error::RelayError;

/// Errors that can suggest a next step to the user.
pub trait ErrorHelp {
    /// A short hint for resolving the error, if one applies.
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for RelayError {
    fn help(&self) -> Option<String> {
        match self {
            RelayError::Http(e) if e.is_connect() => Some(
                "Could not reach the GitHub API. Check your network connection or the configured api_url."
                    .to_string(),
            ),
            RelayError::Http(e) if e.is_decode() => {
                Some("The GitHub API returned a body that could not be decoded.".to_string())
            }
            RelayError::Upstream(msg) if mentions_rate_limit(msg) => Some(
                "GitHub rate limit reached. Set GITHUB_TOKEN to raise the limit to 5000 requests/hour."
                    .to_string(),
            ),
            RelayError::Upstream(_) => Some(
                "The GitHub API rejected the request. Run with RUST_LOG=debug to see the upstream URL."
                    .to_string(),
            ),
            RelayError::NotFound(_) => {
                Some("Check the spelling of the user or repository name.".to_string())
            }
            RelayError::Config(msg) if msg.contains("token") => Some(
                "GITHUB_TOKEN must only contain visible ASCII characters.".to_string(),
            ),
            RelayError::Config(_) | RelayError::Yaml(_) => {
                Some("Check your config.yaml and HUBRELAY_* environment variables.".to_string())
            }
            RelayError::Server(msg) if msg.contains("bind") => Some(
                "Another process may be using this port. Try --port or set PORT.".to_string(),
            ),
            _ => None,
        }
    }
}

fn mentions_rate_limit(msg: &str) -> bool {
    let lower = msg.to_lowercase();
    lower.contains("rate limit") || lower.contains("http 403") || lower.contains("http 429")
}

/// Format an error together with its help text, if any.
pub fn format_error_with_help(error: &RelayError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\n  help: {}", error, help),
        None => format!("Error: {}", error),
    }
}
