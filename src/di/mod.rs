//! Dependency injection infrastructure for Hubrelay
//!
//! The relay reaches the upstream API only through the [`GitHubProvider`]
//! trait, so handlers and terminal commands can be exercised against
//! canned responses.
//!
//! # Example (Production)
//! ```no_run
//! use hubrelay::config::Config;
//! use hubrelay::di::ServiceContainer;
//!
//! # fn example() -> hubrelay::core::RelayResult<()> {
//! let container = ServiceContainer::new(Config::load(None)?)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use hubrelay::config::Config;
//! use hubrelay::di::{mocks::MockGitHubProvider, ServiceContainer};
//! use std::sync::Arc;
//!
//! let github = Arc::new(MockGitHubProvider::new());
//! let container = ServiceContainer::with_providers(Arc::new(Config::default()), github);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

pub use container::ServiceContainer;
pub use traits::GitHubProvider;
