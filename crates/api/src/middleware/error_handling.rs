//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the ClassTime API.
//! It maps domain-specific errors to appropriate HTTP status codes and JSON
//! error responses, ensuring a consistent error handling experience across
//! the entire API.
//!
//! Scheduling conflicts are the one special case: a 409 response carries the
//! full set of colliding slots so the admin UI can display them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use classtime_core::errors::SchoolError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `SchoolError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SchoolError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status code
/// and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SchoolError::NotFound(_) => StatusCode::NOT_FOUND,
            SchoolError::Validation(_) => StatusCode::BAD_REQUEST,
            SchoolError::Conflict { .. } => StatusCode::CONFLICT,
            SchoolError::Authentication(_) => StatusCode::UNAUTHORIZED,
            SchoolError::Authorization(_) => StatusCode::FORBIDDEN,
            SchoolError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SchoolError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Conflict responses carry the colliding slots; everything else is a
        // plain error message.
        let body = match self.0 {
            SchoolError::Conflict { message, conflicts } => {
                Json(json!({ "message": message, "conflicts": conflicts }))
            }
            other => Json(json!({ "error": other.to_string() })),
        };

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from SchoolError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, SchoolError>` in handler functions that return `Result<T, AppError>`.
impl From<SchoolError> for AppError {
    fn from(err: SchoolError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return `Result<T, AppError>`.
/// It wraps the eyre error in a SchoolError::Database variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SchoolError::Database(err))
    }
}

/// Maps a SchoolError to an HTTP response
///
/// This function is provided for code that directly needs the error
/// mapping outside a handler return position.
pub fn map_error(err: SchoolError) -> Response {
    AppError(err).into_response()
}
