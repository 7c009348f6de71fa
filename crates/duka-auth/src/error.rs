//! Typed error taxonomy for the token and session layers.
//!
//! Callers match on these enums to tell a revoked session apart from a bad
//! token; the HTTP layer converts them into [`AppError`] at the boundary.

use thiserror::Error;

use duka_core::error::{AppError, ErrorKind};

use crate::jwt::TokenClass;

/// A presented token failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's expiry has passed.
    #[error("token has expired")]
    Expired,
    /// The token's structure or signature check failed.
    #[error("token is malformed")]
    Malformed,
    /// The token verified but carries the wrong class.
    #[error("wrong token class: expected {expected} token")]
    WrongClass {
        /// The class the caller expected.
        expected: TokenClass,
    },
}

/// A session protocol operation failed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The presented token failed verification.
    #[error(transparent)]
    InvalidToken(#[from] TokenError),
    /// The store holds no record matching the presented refresh token.
    ///
    /// Covers logout-then-refresh, refresh with a rotated-out predecessor,
    /// and refresh after a superseding login.
    #[error("no active session matches the presented refresh token")]
    Revoked,
    /// The session store backend could not be reached.
    #[error("session store unavailable")]
    StoreUnavailable(#[source] AppError),
    /// Token signing failed; indicates a signing-key misconfiguration.
    #[error("token issuance failed")]
    Issuance(#[source] AppError),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authentication(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidToken(e) => e.into(),
            SessionError::Revoked => AppError::session(err.to_string()),
            SessionError::StoreUnavailable(source) => AppError::with_source(
                ErrorKind::ServiceUnavailable,
                "session store unavailable",
                source,
            ),
            SessionError::Issuance(source) => {
                AppError::with_source(ErrorKind::Internal, "token issuance failed", source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_maps_to_authentication() {
        let err: AppError = TokenError::Expired.into();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_revoked_maps_to_session_kind() {
        let err: AppError = SessionError::Revoked.into();
        assert_eq!(err.kind, ErrorKind::Session);
    }

    #[test]
    fn test_store_unavailable_maps_to_service_unavailable() {
        let source = AppError::cache("connection refused");
        let err: AppError = SessionError::StoreUnavailable(source).into();
        assert_eq!(err.kind, ErrorKind::ServiceUnavailable);
    }
}
