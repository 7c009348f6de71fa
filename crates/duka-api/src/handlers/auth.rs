//! Auth handlers — register, login, refresh, logout, me.
//!
//! The refresh token travels exclusively in an HTTP-only cookie; the
//! access token is returned in the response body and presented back as a
//! bearer credential.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use duka_auth::jwt::TokenPair;
use duka_core::config::app::ServerConfig;
use duka_core::error::AppError;
use duka_entity::customer::CreateCustomer;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, CustomerResponse};
use crate::extractors::AuthCustomer;
use crate::state::AppState;

/// Name of the refresh token cookie.
const REFRESH_COOKIE: &str = "refresh_token";

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AuthResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if state
        .customer_repo
        .find_by_email(&req.email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(format!(
            "{} is already registered",
            req.email
        )));
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let customer = state
        .customer_repo
        .create(&CreateCustomer {
            username: req.username,
            email: req.email,
            password_hash,
        })
        .await?;

    let pair = state.session_manager.login(customer.id).await?;
    let jar = jar.add(refresh_cookie(&state.config.server, &pair));

    Ok((jar, Json(ApiResponse::ok(auth_response(pair)))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AuthResponse>>), AppError> {
    req.validate()
        .map_err(|_| AppError::authentication("Invalid email and password combination"))?;

    let customer = state
        .customer_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::authentication("Invalid email and password combination"))?;

    let password_valid = state
        .password_hasher
        .verify_password(&req.password, &customer.password_hash)?;
    if !password_valid {
        return Err(AppError::authentication(
            "Invalid email and password combination",
        ));
    }

    let pair = state.session_manager.login(customer.id).await?;
    let jar = jar.add(refresh_cookie(&state.config.server, &pair));

    Ok((jar, Json(ApiResponse::ok(auth_response(pair)))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<AuthResponse>>), AppError> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::authentication("No refresh token presented"))?;

    let pair = state.session_manager.refresh(&token).await?;
    let jar = jar.add(refresh_cookie(&state.config.server, &pair));

    Ok((jar, Json(ApiResponse::ok(auth_response(pair)))))
}

/// POST /api/auth/logout
///
/// Idempotent: an absent or already-invalid refresh token still results in
/// a successful response — the caller's intent is being logged out.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), AppError> {
    if let Some(cookie) = jar.get(REFRESH_COOKIE) {
        state.session_manager.logout(cookie.value()).await?;
    }

    let jar = jar.remove(Cookie::build((REFRESH_COOKIE, "")).path("/").build());
    Ok((jar, StatusCode::NO_CONTENT))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthCustomer,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let customer = state
        .customer_repo
        .find_by_id(auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("customer not found"))?;

    Ok(Json(ApiResponse::ok(CustomerResponse {
        username: customer.username,
        email: customer.email,
    })))
}

/// Builds the HTTP-only refresh token cookie.
///
/// Secure-flagged everywhere except development, same-site strict. No
/// max-age: the cookie lives for the browser session; the token's own
/// expiry bounds its validity.
fn refresh_cookie(server: &ServerConfig, pair: &TokenPair) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, pair.refresh_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(!server.is_development())
        .build()
}

fn auth_response(pair: TokenPair) -> AuthResponse {
    AuthResponse {
        access_token: pair.access_token,
        access_expires_at: pair.access_expires_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dummy_pair() -> TokenPair {
        TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_expires_at: Utc::now(),
            refresh_expires_at: Utc::now(),
        }
    }

    #[test]
    fn test_refresh_cookie_is_hardened() {
        let server = ServerConfig {
            environment: "production".to_string(),
            ..ServerConfig::default()
        };
        let cookie = refresh_cookie(&server, &dummy_pair());

        assert_eq!(cookie.name(), REFRESH_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_refresh_cookie_not_secure_in_development() {
        let server = ServerConfig::default();
        assert!(server.is_development());
        let cookie = refresh_cookie(&server, &dummy_pair());
        assert_eq!(cookie.secure(), Some(false));
    }
}
