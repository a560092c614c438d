use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::utils::response::ApiResponse;

/// Classified failure modes for the employee API.
///
/// Handlers return these instead of mapping errors to status codes inline;
/// the single `IntoResponse` impl below owns the status mapping.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Database(e) => {
                // Never leak driver details to the client
                tracing::error!(error = %e, "database error while handling request");
                "Internal server error".to_string()
            }
        };

        (status, Json(ApiResponse::<serde_json::Value>::error(&message))).into_response()
    }
}

/// Translate a unique-constraint violation (SQLSTATE 23505) into the
/// duplicate-email validation error; anything else stays a storage fault.
/// Covers the race where two writers pass the COUNT pre-check before either commits.
pub fn map_unique_violation(e: sqlx::Error, message: &str) -> ApiError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23505") {
            return ApiError::Validation(message.to_string());
        }
    }
    ApiError::Database(e)
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation("Missing required field: name".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound("Employee not found".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_fault_maps_to_500() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_unique_violation_stays_database_error() {
        let err = map_unique_violation(sqlx::Error::RowNotFound, "duplicate");
        assert!(matches!(err, ApiError::Database(_)));
    }
}
