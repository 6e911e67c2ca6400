//! Error responses returned to HTTP clients.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Request-level failures, each mapped to a fixed JSON body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// No route matched the request path.
    #[error("Not found")]
    NotFound,

    /// A handler failed while producing its response.
    #[error("Internal server error")]
    Internal,
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Client-facing message, never carries internal detail.
    pub error: &'static str,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field.
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::Internal => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Turn a caught handler panic into a 500 response.
///
/// The panic message is logged but not sent to the client.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(detail, "500 error: handler panicked");
    ApiError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_json() {
        let response = ApiError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Not found" })
        );
    }

    #[tokio::test]
    async fn panic_payload_is_not_leaked() {
        let response = panic_response(Box::new("db password is hunter2".to_string()));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Internal server error" })
        );
    }

    #[test]
    fn display_matches_client_message() {
        assert_eq!(ApiError::NotFound.to_string(), ApiError::NotFound.message());
        assert_eq!(ApiError::Internal.to_string(), ApiError::Internal.message());
    }
}
