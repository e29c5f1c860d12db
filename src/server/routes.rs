use super::error::ApiError;
use crate::config::Config;
use crate::di::ServiceContainer;
use crate::github::UpstreamResponse;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

const SEARCH_FAILED: &str = "Failed to search users";
const USER_FAILED: &str = "Failed to fetch user details";
const USER_REPOS_FAILED: &str = "Failed to fetch repositories";
const REPO_FAILED: &str = "Failed to fetch repository details";
const COMMITS_FAILED: &str = "Failed to fetch commits";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// How a route treats the upstream status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Forwarding {
    /// Forward a non-success upstream status together with its body
    Status,
    /// Answer 200 with whatever body upstream supplied
    BodyOnly,
}

fn relay(config: &Config, forwarding: Forwarding, upstream: UpstreamResponse) -> Response {
    let forward_status = forwarding == Forwarding::Status || config.forward_upstream_status;
    let status = if forward_status && !upstream.is_success() {
        upstream.status
    } else {
        StatusCode::OK
    };
    (status, Json(upstream.body)).into_response()
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Server is running",
    })
}

pub async fn search_users_handler(
    State(state): State<ServiceContainer>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let query = params
        .ok()
        .and_then(|Query(p)| p.q)
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?;

    let upstream = state
        .github()
        .search_users(&query)
        .await
        .map_err(ApiError::upstream(SEARCH_FAILED))?;

    Ok(relay(state.config(), Forwarding::BodyOnly, upstream))
}

pub async fn user_handler(
    State(state): State<ServiceContainer>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let upstream = state
        .github()
        .get_user(&username)
        .await
        .map_err(ApiError::upstream(USER_FAILED))?;

    Ok(relay(state.config(), Forwarding::Status, upstream))
}

pub async fn user_repos_handler(
    State(state): State<ServiceContainer>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let upstream = state
        .github()
        .list_user_repos(&username)
        .await
        .map_err(ApiError::upstream(USER_REPOS_FAILED))?;

    Ok(relay(state.config(), Forwarding::BodyOnly, upstream))
}

pub async fn repo_handler(
    State(state): State<ServiceContainer>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let upstream = state
        .github()
        .get_repo(&owner, &repo)
        .await
        .map_err(ApiError::upstream(REPO_FAILED))?;

    Ok(relay(state.config(), Forwarding::BodyOnly, upstream))
}

pub async fn repo_commits_handler(
    State(state): State<ServiceContainer>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let upstream = state
        .github()
        .list_repo_commits(&owner, &repo)
        .await
        .map_err(ApiError::upstream(COMMITS_FAILED))?;

    Ok(relay(state.config(), Forwarding::BodyOnly, upstream))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
