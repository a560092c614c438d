pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod schemas;
pub mod utils;

pub mod app;

pub use app::create_app;
