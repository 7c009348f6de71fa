//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use duka_auth::password::hasher::PasswordHasher;
use duka_auth::session::manager::SessionManager;
use duka_cache::provider::CacheManager;
use duka_core::config::AppConfig;

use duka_database::repositories::address::AddressRepository;
use duka_database::repositories::customer::CustomerRepository;
use duka_database::repositories::favorite::FavoriteRepository;
use duka_database::repositories::order::OrderRepository;
use duka_database::repositories::payment::PaymentRepository;
use duka_database::repositories::product::ProductRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// Password hasher (Argon2id)
    pub password_hasher: Arc<PasswordHasher>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Repositories ─────────────────────────────────────────
    /// Customer repository
    pub customer_repo: Arc<CustomerRepository>,
    /// Product repository
    pub product_repo: Arc<ProductRepository>,
    /// Order repository
    pub order_repo: Arc<OrderRepository>,
    /// Payment repository
    pub payment_repo: Arc<PaymentRepository>,
    /// Favorite repository
    pub favorite_repo: Arc<FavoriteRepository>,
    /// Address repository
    pub address_repo: Arc<AddressRepository>,
}
