//! Integration tests for the session/token flow over HTTP.
//!
//! These tests run against the real router with the in-memory cache
//! backend and a lazily-connected database pool; they only exercise
//! routes that never reach the database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use duka_api::state::AppState;
use duka_auth::jwt::codec::TokenCodec;
use duka_auth::password::hasher::PasswordHasher;
use duka_auth::session::manager::SessionManager;
use duka_auth::session::store::SessionStore;
use duka_cache::memory::MemoryCacheProvider;
use duka_cache::provider::CacheManager;
use duka_core::config::AppConfig;
use duka_database::connection::DatabasePool;
use duka_database::repositories::address::AddressRepository;
use duka_database::repositories::customer::CustomerRepository;
use duka_database::repositories::favorite::FavoriteRepository;
use duka_database::repositories::order::OrderRepository;
use duka_database::repositories::payment::PaymentRepository;
use duka_database::repositories::product::ProductRepository;

struct TestApp {
    router: Router,
    session_manager: Arc<SessionManager>,
}

struct TestResponse {
    status: StatusCode,
    body: Value,
    set_cookies: Vec<String>,
}

impl TestApp {
    fn new() -> Self {
        let config = AppConfig::default();

        let db_pool = DatabasePool::connect_lazy(&config.database)
            .expect("lazy pool")
            .into_pool();

        let provider = Arc::new(MemoryCacheProvider::new(&config.cache.memory));
        let cache = Arc::new(CacheManager::from_provider(provider));

        let token_codec = Arc::new(TokenCodec::new(&config.auth));
        let session_store = Arc::new(SessionStore::new(Arc::clone(&cache), &config.auth));
        let session_manager = Arc::new(SessionManager::new(token_codec, session_store));

        let state = AppState {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            cache,
            password_hasher: Arc::new(PasswordHasher::new()),
            session_manager: Arc::clone(&session_manager),
            customer_repo: Arc::new(CustomerRepository::new(db_pool.clone())),
            product_repo: Arc::new(ProductRepository::new(db_pool.clone())),
            order_repo: Arc::new(OrderRepository::new(db_pool.clone())),
            payment_repo: Arc::new(PaymentRepository::new(db_pool.clone())),
            favorite_repo: Arc::new(FavoriteRepository::new(db_pool.clone())),
            address_repo: Arc::new(AddressRepository::new(db_pool)),
        };

        Self {
            router: duka_api::router::build_router(state),
            session_manager,
        }
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        bearer: Option<&str>,
        refresh_cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = bearer {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(token) = refresh_cookie {
            req = req.header("Cookie", format!("refresh_token={}", token));
        }

        let response = self
            .router
            .clone()
            .oneshot(req.body(Body::empty()).expect("request"))
            .await
            .expect("response");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["status"].as_str().unwrap(),
        "ok"
    );
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/orders", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/orders", Some("garbage"), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_refresh_token_as_bearer() {
    // A refresh token must not pass the access gate.
    let app = TestApp::new();
    let pair = app.session_manager.login(Uuid::new_v4()).await.unwrap();

    let response = app
        .request("GET", "/api/orders", Some(&pair.refresh_token), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = TestApp::new();
    let response = app.request("POST", "/api/auth/refresh", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_with_garbage_cookie() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/auth/refresh", None, Some("garbage"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rotates_cookie() {
    let app = TestApp::new();
    let subject = Uuid::new_v4();
    let pair = app.session_manager.login(subject).await.unwrap();

    let response = app
        .request("POST", "/api/auth/refresh", None, Some(&pair.refresh_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert!(
        response
            .set_cookies
            .iter()
            .any(|c| c.starts_with("refresh_token=") && c.contains("HttpOnly")),
        "rotated refresh token must be set as an HTTP-only cookie"
    );

    // The consumed refresh token was rotated out.
    let replay = app
        .request("POST", "/api/auth/refresh", None, Some(&pair.refresh_token))
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refreshed_access_token_passes_gate() {
    let app = TestApp::new();
    let subject = Uuid::new_v4();
    let pair = app.session_manager.login(subject).await.unwrap();

    let response = app
        .request("POST", "/api/auth/refresh", None, Some(&pair.refresh_token))
        .await;
    let access_token = response.body["data"]["access_token"].as_str().unwrap();
    assert_eq!(
        app.session_manager.verify_access(access_token).unwrap(),
        subject
    );
}

#[tokio::test]
async fn test_logout_without_cookie_succeeds() {
    let app = TestApp::new();
    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_logout_with_garbage_cookie_succeeds() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/auth/logout", None, Some("garbage"))
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_logout_revokes_session_and_clears_cookie() {
    let app = TestApp::new();
    let pair = app.session_manager.login(Uuid::new_v4()).await.unwrap();

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&pair.refresh_token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(
        response
            .set_cookies
            .iter()
            .any(|c| c.starts_with("refresh_token=;") || c.starts_with("refresh_token=\"\"")),
        "logout must clear the refresh cookie"
    );

    let replay = app
        .request("POST", "/api/auth/refresh", None, Some(&pair.refresh_token))
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
}
