//! Shared handler helpers for the REST API.
//!
//! Provides common patterns used across all handlers to reduce duplication
//! and ensure consistent error responses.

use axum::{http::StatusCode, Json};

use crate::error::ProviderError;
use crate::types::ErrorResponse;

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build an error response with the given status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Validate a country code before it is placed in an upstream URL.
///
/// Accepts 2-3 letter ISO codes and 3 digit numeric codes.
///
/// # Errors
///
/// Returns `(400, ErrorResponse)` if the code is empty, too long or not alphanumeric.
pub fn validate_code(code: &str) -> Result<(), ApiError> {
    if (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid country code '{code}'"),
        ))
    }
}

/// Validate a region name before it is placed in an upstream URL.
///
/// # Errors
///
/// Returns `(400, ErrorResponse)` if the name is empty or not alphabetic.
pub fn validate_region(region: &str) -> Result<(), ApiError> {
    if !region.is_empty() && region.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid region '{region}'"),
        ))
    }
}

/// Map a provider failure to an HTTP error without leaking upstream details.
///
/// `NotFound` becomes 404 with `not_found_message`; every other failure is
/// logged server-side and becomes 502.
pub fn provider_error(context: &str, not_found_message: &str, err: &ProviderError) -> ApiError {
    match err {
        ProviderError::NotFound(_) => error_response(StatusCode::NOT_FOUND, not_found_message),
        _ => {
            tracing::error!(%context, error = %err, "Country provider failure");
            error_response(
                StatusCode::BAD_GATEWAY,
                format!("{context}: country data service unavailable"),
            )
        }
    }
}

/// Build an internal server error response without leaking implementation details.
///
/// Logs the full error server-side via `tracing::error!` and returns a generic
/// message to the client.
pub fn internal_error(context: &str, err: &dyn std::fmt::Display) -> ApiError {
    tracing::error!(%context, error = %err, "Internal server error");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{context}: internal error"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code() {
        assert!(validate_code("FRA").is_ok());
        assert!(validate_code("fr").is_ok());
        assert!(validate_code("250").is_ok());
        assert!(validate_code("").is_err());
        assert!(validate_code("FRAN").is_err());
        assert!(validate_code("F/A").is_err());
    }

    #[test]
    fn test_validate_region() {
        assert!(validate_region("Europe").is_ok());
        assert!(validate_region("").is_err());
        assert!(validate_region("../all").is_err());
    }

    #[test]
    fn test_provider_not_found_is_404() {
        let err = ProviderError::NotFound("country 'XYZ'".into());
        let (status, Json(body)) = provider_error("Neighbors", "Country not found", &err);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Country not found");
    }

    #[test]
    fn test_provider_failure_does_not_leak_details() {
        let err = ProviderError::Status {
            status: 500,
            body: "stack trace with secrets".into(),
        };
        let (status, Json(body)) = provider_error("Route", "unused", &err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.error.contains("unavailable"));
        assert!(!body.error.contains("secrets"));
    }

    #[test]
    fn test_internal_error_does_not_leak_details() {
        let detail = "JoinError: task panicked with sensitive data";
        let (status, Json(body)) = internal_error("Route", &detail);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("internal error"));
        assert!(!body.error.contains("panicked"));
        assert!(!body.error.contains("sensitive"));
    }
}
