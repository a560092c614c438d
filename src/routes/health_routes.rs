use axum::{routing::get, Router};

use crate::handlers::health_handler::health;

pub fn health_routes() -> Router {
    Router::new().route("/api/health", get(health))
}
