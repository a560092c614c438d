use axum::{
    routing::get,
    Router,
};

use crate::handlers::employee_handler::{destroy, index, show, stats, store, update};

pub fn employee_routes() -> Router {
    Router::new()
        .route("/api/employees", get(index).post(store))
        // static segment wins over the {id} capture, so /stats stays reachable
        .route("/api/employees/stats", get(stats))
        .route("/api/employees/{id}", get(show).put(update).delete(destroy))
}
