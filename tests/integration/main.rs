//! Integration tests for the relay service
//!
//! Each test runs the real server on an ephemeral port against a wiremock
//! stand-in for the GitHub API.

pub mod common;
