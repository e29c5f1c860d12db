//! GitHub REST API integration
//!
//! This module provides:
//! - The upstream client that issues GETs with the fixed header set
//! - Builders for the upstream endpoint paths the relay uses
//! - Typed views over upstream payloads for the terminal commands

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::{
    CommitEntry, RepoDetail, RepoSummary, SearchResults, UpstreamResponse, UserProfile,
    UserSummary,
};
