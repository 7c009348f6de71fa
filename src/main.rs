//! Duka Server — e-commerce storefront backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use duka_core::config::AppConfig;
use duka_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("DUKA_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Duka v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection ──────────────────────────────
    tracing::info!("Connecting to database...");
    let db = duka_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    tracing::info!("Running database migrations...");
    duka_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize cache ─────────────────────────────────
    tracing::info!("Initializing cache (provider: {})...", config.cache.provider);
    let cache = Arc::new(duka_cache::provider::CacheManager::new(&config.cache).await?);
    tracing::info!("Cache initialized");

    // ── Step 3: Initialize repositories ──────────────────────────
    let customer_repo = Arc::new(
        duka_database::repositories::customer::CustomerRepository::new(db_pool.clone()),
    );
    let product_repo = Arc::new(duka_database::repositories::product::ProductRepository::new(
        db_pool.clone(),
    ));
    let order_repo = Arc::new(duka_database::repositories::order::OrderRepository::new(
        db_pool.clone(),
    ));
    let payment_repo = Arc::new(duka_database::repositories::payment::PaymentRepository::new(
        db_pool.clone(),
    ));
    let favorite_repo = Arc::new(
        duka_database::repositories::favorite::FavoriteRepository::new(db_pool.clone()),
    );
    let address_repo = Arc::new(duka_database::repositories::address::AddressRepository::new(
        db_pool.clone(),
    ));

    // ── Step 4: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(duka_auth::password::hasher::PasswordHasher::new());
    let token_codec = Arc::new(duka_auth::jwt::codec::TokenCodec::new(&config.auth));
    let session_store = Arc::new(duka_auth::session::store::SessionStore::new(
        Arc::clone(&cache),
        &config.auth,
    ));
    let session_manager = Arc::new(duka_auth::session::manager::SessionManager::new(
        token_codec,
        session_store,
    ));
    tracing::info!("Authentication system initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = duka_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        cache,
        password_hasher,
        session_manager,
        customer_repo,
        product_repo,
        order_repo,
        payment_repo,
        favorite_repo,
        address_repo,
    };

    let app = duka_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Duka server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    tracing::info!("Duka server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
