use crate::error::ApiError;
use crate::utils::response::ApiResponse;
use axum::{http::StatusCode, Json};

/// Generic handler result type used across HTTP handlers to simplify signatures.
///
/// Success carries the status plus an envelope; failures are classified
/// `ApiError`s that the boundary maps to status codes.
pub type HandlerResult<T = serde_json::Value> =
    Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;
