use axum::{http::StatusCode, Extension, Json};
use serde_json::json;
use sqlx::PgPool;

use crate::utils::handler::HandlerResult;
use crate::utils::response::ApiResponse;

/// GET /api/health — liveness probe with a DB ping.
pub async fn health(Extension(db): Extension<PgPool>) -> HandlerResult {
    let res: Result<i32, sqlx::Error> = sqlx::query_scalar("SELECT 1").fetch_one(&db).await;

    match res {
        Ok(_) => {
            let response = ApiResponse::success_with_data(json!({ "db": "ok" }));
            Ok((StatusCode::OK, Json(response)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "health check failed to reach database");
            Err(e.into())
        }
    }
}
