//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `marina::MarinaError`, rendered through `kernel::error::AppError`.

use marina::{
    MarinaConfig, MemoryDocumentStore, PgDocumentStore, marina_router, marina_router_in_memory,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,marina=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MarinaConfig::from_env()?;

    // The store is built once here and shared by every request
    let router = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            marina_router(PgDocumentStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory only");
            marina_router_in_memory(MemoryDocumentStore::new())
        }
    };

    let app = router.layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("App listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
