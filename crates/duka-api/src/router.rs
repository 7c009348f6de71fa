//! Route definitions for the Duka HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(product_routes())
        .merge(order_routes())
        .merge(favorite_routes())
        .merge(address_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Product CRUD. Reads are public, writes authenticated.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::product::list_products))
        .route("/products", post(handlers::product::create_product))
        .route("/products/{id}", get(handlers::product::get_product))
        .route("/products/{id}", put(handlers::product::update_product))
        .route("/products/{id}", delete(handlers::product::delete_product))
}

/// Order endpoints, scoped to the authenticated customer.
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(handlers::order::list_orders))
        .route("/orders", post(handlers::order::create_order))
        .route("/orders/{id}", get(handlers::order::get_order))
        .route("/orders/{id}", delete(handlers::order::delete_order))
}

/// Favorite endpoints, scoped to the authenticated customer.
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(handlers::favorite::list_favorites))
        .route("/favorites", post(handlers::favorite::create_favorite))
        .route("/favorites/{id}", get(handlers::favorite::get_favorite))
        .route("/favorites/{id}", put(handlers::favorite::update_favorite))
        .route(
            "/favorites/{id}",
            delete(handlers::favorite::delete_favorite),
        )
}

/// Address and default-address endpoints.
fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/addresses", get(handlers::address::list_addresses))
        .route("/addresses", post(handlers::address::create_address))
        .route(
            "/addresses/default",
            get(handlers::address::get_default_address),
        )
        .route(
            "/addresses/default",
            post(handlers::address::set_default_address),
        )
        .route(
            "/addresses/default",
            put(handlers::address::update_default_address),
        )
        .route(
            "/addresses/default",
            delete(handlers::address::delete_default_address),
        )
        .route("/addresses/{id}", get(handlers::address::get_address))
        .route("/addresses/{id}", put(handlers::address::update_address))
        .route("/addresses/{id}", delete(handlers::address::delete_address))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
