//! Registry Error Types
//!
//! This module provides registry-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Candidate record failed one or more field checks
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Application not found")]
    ApplicationNotFound,

    /// Requested page is not an integer, below 1, or past the last page
    #[error("Invalid page ({0})")]
    PageNotFound(String),

    /// Unknown value for a list filter
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Path or body that could not be extracted
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::ApplicationNotFound | RegistryError::PageNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            RegistryError::InvalidFilter(_) | RegistryError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::Validation(_) => ErrorKind::UnprocessableEntity,
            RegistryError::ApplicationNotFound | RegistryError::PageNotFound(_) => {
                ErrorKind::NotFound
            }
            RegistryError::InvalidFilter(_) | RegistryError::InvalidRequest(_) => {
                ErrorKind::BadRequest
            }
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Storage failures go through the kernel's sqlx classification so pool
    /// exhaustion and constraint violations keep their own status codes.
    pub fn into_app_error(self) -> AppError {
        match self {
            RegistryError::Validation(errors) => {
                let app_err = AppError::unprocessable("Validation failed");
                match serde_json::to_value(&errors) {
                    Ok(details) => app_err.with_details(details),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize validation errors");
                        app_err
                    }
                }
            }
            RegistryError::Database(err) => AppError::from(err),
            // Internal details stay in the log
            RegistryError::Internal(_) => AppError::internal("Internal error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistryError::Database(e) => {
                tracing::error!(error = %e, "Registry database error");
            }
            RegistryError::Internal(msg) => {
                tracing::error!(message = %msg, "Registry internal error");
            }
            RegistryError::Validation(errors) => {
                tracing::info!(errors = %errors, "Application rejected by validation");
            }
            _ => {
                tracing::debug!(error = %self, "Registry error");
            }
        }
    }
}

impl From<ValidationErrors> for RegistryError {
    fn from(errors: ValidationErrors) -> Self {
        RegistryError::Validation(errors)
    }
}

impl From<PathRejection> for RegistryError {
    fn from(rejection: PathRejection) -> Self {
        RegistryError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for RegistryError {
    fn from(rejection: JsonRejection) -> Self {
        RegistryError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
