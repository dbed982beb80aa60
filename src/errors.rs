// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::ResponseEnvelope;

pub const FIELD_GET_CATEGORY: &str = "get category";
pub const FIELD_GET_CATEGORIES: &str = "get list of categories";
pub const FIELD_NOT_FOUND: &str = "not found";
pub const FIELD_SERVER: &str = "server";

pub const ERR_CONVERT_VARIABLE_TYPE: &str = "convert variabel type failed";
pub const ERR_CATEGORY_NOT_EXISTS: &str = "product category not exists";
pub const ERR_NOT_FOUND: &str = "sorry your destination is not found";
pub const ERR_INTERNAL_SERVER: &str = "internal server error";

const VALIDATION_MESSAGE: &str = "validation error";

/// One entry of the `error` list in a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub detail: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request [{field}]: {detail}")]
    BadRequest { field: String, detail: String },

    #[error("Unauthorized [{field}]: {detail}")]
    Unauthorized { field: String, detail: String },

    #[error("Not found [{field}]: {detail}")]
    NotFound { field: String, detail: String },

    #[error("Internal server error [{field}]: {detail}")]
    InternalServerError { field: String, detail: String },

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),
}

impl AppError {
    pub fn bad_request(field: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::BadRequest {
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub fn unauthorized(field: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Unauthorized {
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(field: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::NotFound {
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(field: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::InternalServerError {
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error-only envelope: `data` is never set.
    pub fn into_envelope(self) -> ResponseEnvelope<(), Vec<FieldError>> {
        match self {
            AppError::Validation(errors) => ResponseEnvelope::failure(errors, VALIDATION_MESSAGE),
            AppError::BadRequest { field, detail }
            | AppError::Unauthorized { field, detail }
            | AppError::NotFound { field, detail } => {
                ResponseEnvelope::failure(vec![FieldError::new(field, detail)], "")
            }
            AppError::InternalServerError { field, detail } => {
                tracing::error!("Internal error in '{}': {}", field, detail);
                ResponseEnvelope::failure(vec![FieldError::new(field, ERR_INTERNAL_SERVER)], "")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, self.into_envelope()).into_response()
    }
}
