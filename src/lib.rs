//! Hubrelay: a read-only relay for the GitHub REST API
//!
//! This crate provides the relay library, re-exporting core functionality
//! from `hubrelay-core` and organizing the upstream client, the HTTP
//! service and their shared configuration.

pub use hubrelay_core::{format_error_with_help, ErrorHelp, RelayError, RelayResult};

/// Core module re-exported from hubrelay-core.
pub mod core {
    pub use hubrelay_core::core::*;
    pub use hubrelay_core::*;
}

/// Configuration management.
pub mod config;

/// GitHub API client.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;

/// HTTP relay service.
pub mod server;
