use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::compression::CompressionLayer;

use virtualpet_api::{config::Config, db, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "virtualpet_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to create database pool")?;

    db::run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    let state = AppState::new(db, config.clone());
    state.rate_limiter.spawn_cleanup_worker();

    let app = router(state).layer(CompressionLayer::new());

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
