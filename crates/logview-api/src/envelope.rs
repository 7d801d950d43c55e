//! JSON response envelope and error→status mapping.
//!
//! Every response, success or failure, carries the same shape:
//! `{ "success": bool, "message": string, "data": ... }`, with `data` omitted
//! when there is none.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use logview_core::Error;
use serde::Serialize;

/// Uniform response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Core error carried across the handler boundary.
///
/// Validation and query errors are the caller's fault (400); storage errors
/// are ours (500) and are the only thing this layer logs.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) | Error::Query(_) => StatusCode::BAD_REQUEST,
            Error::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(Envelope::failure(self.0.to_string()))).into_response()
    }
}
