use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::error::Error;

/// Error envelope returned by every failing route.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Failures a route can surface: rejected input (400), or a backing-service
/// error (500) with the underlying message attached.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Backing { error: String, details: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn backing(message: impl Into<String>, source: Box<dyn Error + Send + Sync>) -> Self {
        Self::Backing {
            error: message.into(),
            details: source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error,
                    details: None,
                },
            ),
            ApiError::Backing { error, details } => {
                tracing::error!(%error, %details, "backing service call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error,
                        details: Some(details),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
