// src/response.rs
use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::errors::FieldError;

/// Top-level body of every API response.
///
/// Clients check `error` first and fall back to `data`. Empty parts are left
/// out of the JSON entirely, so consumers must not rely on a key being present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope<T = Value, E = Vec<FieldError>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<E>,
}

/// Packages the three parts exactly as given.
///
/// Nothing stops a caller from setting both `data` and `error`; not doing so
/// is the caller's contract. [`ResponseEnvelope::from_result`] enforces it.
pub fn build_response<T, E>(
    data: Option<T>,
    message: impl Into<String>,
    error: Option<E>,
) -> ResponseEnvelope<T, E> {
    ResponseEnvelope {
        data,
        message: message.into(),
        error,
    }
}

impl<T, E> ResponseEnvelope<T, E> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        build_response(Some(data), message, None)
    }

    pub fn failure(error: E, message: impl Into<String>) -> Self {
        build_response(None, message, Some(error))
    }

    pub fn message(message: impl Into<String>) -> Self {
        build_response(None, message, None)
    }

    /// Exactly one of `data` and `error` ends up set.
    pub fn from_result(result: Result<T, E>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self::success(data, message),
            Err(error) => Self::failure(error, message),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<T, E> From<Result<T, E>> for ResponseEnvelope<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result, String::new())
    }
}

impl<T: Serialize, E: Serialize> IntoResponse for ResponseEnvelope<T, E> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
