use crate::core::RelayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures a relay route reports to its caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The search route was called without a usable `q` parameter
    #[error("Search query is required")]
    MissingQuery,

    /// The upstream call could not be completed or its body was not JSON
    #[error("{context}")]
    Upstream {
        context: &'static str,
        #[source]
        source: RelayError,
    },

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    /// Wrap an upstream failure with the route's generic error text
    pub fn upstream(context: &'static str) -> impl FnOnce(RelayError) -> Self {
        move |source| ApiError::Upstream { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Upstream { context, source } => {
                error!(error = %source, "{}", context);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": context,
                        "message": source.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
