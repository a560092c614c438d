use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use employee_records_api::config::{database, Settings};
use employee_records_api::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env file (if present)
    dotenv().ok();

    let settings = Settings::from_env();

    // Structured logs; APP_DEBUG raises the default level, RUST_LOG overrides
    let default_level = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Connect and create the employees table if it does not exist yet
    let db_pool = database::establish_connection(&settings.database_url()).await?;
    tracing::info!("Database connected and migrations applied");

    let app = create_app(db_pool);

    let addr: SocketAddr = settings
        .server_addr()
        .parse()
        .expect("APP_HOST:APP_PORT must form a valid socket address");

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let server = axum::serve(listener, app.into_make_service());

    let shutdown_signal = async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown signal received");
    };

    tokio::select! {
        res = server => {
            res?;
        }
        _ = shutdown_signal => {
            tracing::info!("Shutdown requested; exiting");
        }
    };

    Ok(())
}
