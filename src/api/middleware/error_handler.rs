//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError, providing
//! consistent error response formatting across the API, and the middleware
//! that stamps the request id onto structured error bodies. Infrastructure
//! failures are reported with sanitized messages; their sources stay in the
//! logs only.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::RequestId;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// The status comes from [`error_to_status_code`]. The structured body is
    /// also stored in the response extensions so [`global_error_handler`] can
    /// attach the request id for correlation.
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let error_response = error_body(&self);

        let mut response = (status, Json(error_response.clone())).into_response();
        response.extensions_mut().insert(error_response);
        response
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
///
/// # Status Code Mapping
/// - NotFound → 404 NOT_FOUND
/// - Validation → 400 BAD_REQUEST
/// - BadRequest → 400 BAD_REQUEST
/// - Database → 500 INTERNAL_SERVER_ERROR
/// - Configuration → 500 INTERNAL_SERVER_ERROR
/// - ConnectionPool → 503 SERVICE_UNAVAILABLE
/// - Internal → 500 INTERNAL_SERVER_ERROR
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the structured response body for an AppError variant.
fn error_body(error: &AppError) -> ErrorResponse {
    match error {
        AppError::NotFound { entity, field, value } => {
            ErrorResponse::not_found_error(entity, field, value)
        }
        AppError::Validation { field, reason } => ErrorResponse::new(
            "VALIDATION_ERROR",
            &format!("Validation failed for {}: {}", field, reason),
        ),
        AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
        AppError::Database { operation, .. } => ErrorResponse::new(
            "DATABASE_ERROR",
            &format!("Database operation failed: {}", operation),
        )
        .with_details(json!({
            "operation": operation
        })),
        AppError::Configuration { key, .. } => ErrorResponse::new(
            "CONFIGURATION_ERROR",
            &format!("Configuration error: {}", key),
        )
        .with_details(json!({
            "key": key
        })),
        AppError::ConnectionPool { .. } => {
            ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable")
        }
        AppError::Internal { .. } => {
            ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
        }
    }
}

/// Middleware that attaches the request id to structured error bodies.
///
/// `AppError::into_response` leaves its `ErrorResponse` in the response
/// extensions; when one is present, the body is rebuilt with the request id
/// set by the request-id middleware, which must run outside this layer.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone());

    let mut response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };

    if let Some(error_response) = response.extensions_mut().remove::<ErrorResponse>() {
        let status = response.status();
        return (status, Json(error_response.with_request_id(&request_id))).into_response();
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_code() {
        let error = AppError::not_found("organisation", "id", 123);
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_status_code() {
        let error = AppError::Validation {
            field: "rollback_steps".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_status_code() {
        let error = AppError::BadRequest {
            message: "Invalid input".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_status_code() {
        let error = AppError::Database {
            operation: "insert location".to_string(),
            source: anyhow::anyhow!("Connection failed"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_connection_pool_status_code() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("Pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_into_response_exposes_structured_body() {
        let response = AppError::not_found("organisation", "id", 9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert_eq!(body.code, "NOT_FOUND");
        assert!(body.request_id.is_none());
    }

    #[test]
    fn test_internal_error_is_sanitized() {
        // The response must not expose the source detail.
        let error = AppError::Internal {
            source: anyhow::anyhow!("panic with sensitive data"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert_eq!(body.message, "An internal error occurred");
    }
}
