use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::http::HeaderValue;
use dotenv::dotenv;
use pastebin_service::{
    adapters::{rate_limiter::RateLimiter, repositories::PgPasteRepository},
    application::{
        error::ApplicationError, repositories::paste_repository::PasteRepository,
        services::paste_service::PasteService,
    },
    create_router,
    domain::config::server::{ConfigError, ServerConfig},
    AppState,
};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid CORS origin: {0}")]
    CorsOrigin(String),
    #[error("failed to connect to PostgreSQL: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("failed to initialize schema: {0}")]
    Schema(#[from] ApplicationError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let cors = match &config.cors_allowed_origins {
        Some(allowed_origins) => {
            let origins = allowed_origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .map_err(|_| StartupError::CorsOrigin(origin.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    };

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;

    let repository = PgPasteRepository::new(pool);
    repository.ensure_schema().await?;
    tracing::info!("Schema initialized");

    let app_state = AppState {
        paste_service: PasteService::new(
            Arc::new(repository) as Arc<dyn PasteRepository>,
            config.burn_policy,
        ),
        rate_limiter: RateLimiter::new(config.rate_limit),
    };

    let router = create_router(app_state, cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Server listening on {} (burn policy: {:?}, rate limit: {} requests / {:?})",
        addr,
        config.burn_policy,
        config.rate_limit.max_requests,
        config.rate_limit.window
    );

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
