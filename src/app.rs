use axum::{
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    Extension, Json, Router,
};
use sqlx::PgPool;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::utils::response::ApiResponse;

/// JSON 404 envelope for anything neither the API nor the static tree knows.
async fn not_found() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Resource not found")),
    )
}

pub fn build_router() -> Router {
    use axum::http::Method;
    use tower_http::cors::{Any, CorsLayer};

    let mut app = Router::new()
        .merge(crate::routes::employee_routes::employee_routes())
        .merge(crate::routes::health_routes::health_routes());

    // Anything that is not an API route is served from the static front-end
    // directory; files that do not exist fall through to the JSON 404.
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let static_service = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());
    app = app.fallback_service(static_service);

    // CORS is open by default (the front end may be hosted elsewhere);
    // CORS_ALLOWED_ORIGINS narrows it to a CSV of origins.
    let cors_layer = match std::env::var("CORS_ALLOWED_ORIGINS").ok() {
        Some(list) if list.trim() != "*" => {
            use axum::http::header::HeaderValue;
            use tower_http::cors::AllowOrigin;
            let origins = list
                .split(',')
                .filter_map(|s| HeaderValue::from_str(s.trim()).ok())
                .collect::<Vec<HeaderValue>>();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any)
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any),
    };
    app = app.layer(cors_layer);

    app.layer(TraceLayer::new_for_http())
}

pub fn create_app(pool: PgPool) -> Router {
    build_router().layer(Extension(pool))
}
