//! `AuthCustomer` extractor — pulls the access token from the
//! Authorization header, verifies it, and injects the subject.
//!
//! Access tokens are stateless, so this never touches the session store;
//! the handler is not invoked when verification fails.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use duka_core::error::AppError;

use crate::state::AppState;

/// The authenticated principal resolved from a bearer access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthCustomer {
    /// The authenticated customer ID.
    pub subject: Uuid,
}

impl FromRequestParts<AppState> for AuthCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let subject = state.session_manager.verify_access(token)?;

        Ok(AuthCustomer { subject })
    }
}
