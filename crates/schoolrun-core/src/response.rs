//! JSON response writer.
//!
//! An [`ApiResponse`] is the single, final output of a request: a status code
//! plus a JSON body. Success bodies are the handler payload verbatim (object,
//! array or `null`); error bodies are always `{"error": "<message>"}`.
//!
//! A handler produces exactly one `ApiResponse` and hands it back by value, so
//! nothing can be written after it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::errors::AppError;

/// Message sent for 5xx errors when internal detail is hidden.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    /// Serializes `data` as the response body with the given status.
    pub fn json<T>(data: T, status: StatusCode) -> Result<Self, AppError>
    where
        T: Serialize,
    {
        let body = serde_json::to_value(data)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to encode response: {}", e)))?;
        Ok(Self { status, body })
    }

    /// `200 OK` with `data` as the body.
    pub fn ok<T>(data: T) -> Result<Self, AppError>
    where
        T: Serialize,
    {
        Self::json(data, StatusCode::OK)
    }

    /// `{"error": message}` with the given status.
    pub fn error(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// `{"error": message}` with `400 Bad Request`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(message, StatusCode::BAD_REQUEST)
    }

    /// Renders an [`AppError`] into the error envelope.
    ///
    /// Client errors keep their message. Server errors are always logged with
    /// their full cause; the cause is echoed to the client only when
    /// `expose_internal` is set.
    pub fn from_error(err: AppError, expose_internal: bool) -> Self {
        if err.is_server_error() {
            error!(status = %err.status.as_u16(), error = ?err.error, "Internal failure");
            let message = if expose_internal {
                err.message()
            } else {
                INTERNAL_ERROR_MESSAGE.to_string()
            };
            return Self::error(message, err.status);
        }

        Self::error(err.message(), err.status)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
