//! Session lifecycle manager — login, refresh, logout, access verification.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{SessionError, TokenError};
use crate::jwt::{TokenClass, TokenCodec, TokenPair};

use super::store::SessionStore;

/// Orchestrates the token codec and session store to implement the
/// login/refresh/logout protocol.
///
/// Concurrent logins and refreshes for the same subject race at the store;
/// whichever `put` lands last owns the active refresh token, and the other
/// party's next refresh fails with [`SessionError::Revoked`]. No in-process
/// locking is needed because every transition is a single store operation.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Token codec for issuing and verifying tokens.
    codec: Arc<TokenCodec>,
    /// Server-side session records.
    store: Arc<SessionStore>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(codec: Arc<TokenCodec>, store: Arc<SessionStore>) -> Self {
        Self { codec, store }
    }

    /// Opens a session for the subject, superseding any prior one.
    ///
    /// Issues an access/refresh pair and records the refresh token's `jti`
    /// as the subject's single valid session.
    pub async fn login(&self, subject: Uuid) -> Result<TokenPair, SessionError> {
        let (pair, refresh_jti) = self.issue_pair(subject)?;
        self.store.put(subject, refresh_jti).await?;

        info!(%subject, "Session opened");
        Ok(pair)
    }

    /// Exchanges a valid refresh token for a new pair, rotating the record.
    ///
    /// The old refresh token becomes unusable the moment the store points
    /// at the new `jti` — the store write is the commit point. A token
    /// handed out here but never received by the client simply expires.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError> {
        let claims = self.codec.verify(refresh_token, TokenClass::Refresh)?;
        let subject = claims.subject();

        match self.store.get(subject).await? {
            Some(current) if current == claims.jti => {}
            _ => {
                debug!(%subject, "Refresh rejected: record absent or superseded");
                return Err(SessionError::Revoked);
            }
        }

        let (pair, refresh_jti) = self.issue_pair(subject)?;
        self.store.put(subject, refresh_jti).await?;

        info!(%subject, "Session rotated");
        Ok(pair)
    }

    /// Closes the subject's session.
    ///
    /// An already-invalid refresh token is absorbed as success: the
    /// caller's intent — being logged out — is satisfied either way. Store
    /// failures are still surfaced.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), SessionError> {
        let subject = match self.codec.verify(refresh_token, TokenClass::Refresh) {
            Ok(claims) => claims.subject(),
            Err(e) => {
                debug!(error = %e, "Logout with invalid refresh token, treating as success");
                return Ok(());
            }
        };

        self.store.delete(subject).await?;
        info!(%subject, "Session closed");
        Ok(())
    }

    /// Verifies an access token and returns its subject.
    ///
    /// Delegates to the codec only: access tokens are stateless and remain
    /// valid until their own expiry even after logout or rotation.
    pub fn verify_access(&self, access_token: &str) -> Result<Uuid, TokenError> {
        let claims = self.codec.verify(access_token, TokenClass::Access)?;
        Ok(claims.subject())
    }

    /// Issues a fresh access/refresh pair, returning the refresh `jti`.
    fn issue_pair(&self, subject: Uuid) -> Result<(TokenPair, Uuid), SessionError> {
        let access = self
            .codec
            .issue(subject, TokenClass::Access)
            .map_err(SessionError::Issuance)?;
        let refresh = self
            .codec
            .issue(subject, TokenClass::Refresh)
            .map_err(SessionError::Issuance)?;

        let refresh_jti = refresh.claims.jti;
        let pair = TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
            access_expires_at: access.claims.expires_at(),
            refresh_expires_at: refresh.claims.expires_at(),
        };
        Ok((pair, refresh_jti))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use duka_cache::memory::MemoryCacheProvider;
    use duka_cache::provider::CacheManager;
    use duka_core::config::auth::AuthConfig;
    use duka_core::config::cache::MemoryCacheConfig;

    fn test_manager() -> SessionManager {
        let config = AuthConfig {
            jwt_secret: "session-test-secret".to_string(),
            ..AuthConfig::default()
        };
        let provider = Arc::new(MemoryCacheProvider::new(&MemoryCacheConfig {
            max_capacity: 1000,
        }));
        let cache = Arc::new(CacheManager::from_provider(provider));
        let codec = Arc::new(TokenCodec::new(&config));
        let store = Arc::new(SessionStore::new(cache, &config));
        SessionManager::new(codec, store)
    }

    #[tokio::test]
    async fn test_login_then_verify_access() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        let pair = manager.login(subject).await.unwrap();
        assert_eq!(manager.verify_access(&pair.access_token).unwrap(), subject);
    }

    #[tokio::test]
    async fn test_rotation_invalidates_previous_refresh_token() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        let first = manager.login(subject).await.unwrap();
        let second = manager.refresh(&first.refresh_token).await.unwrap();

        // The consumed token is now superseded.
        let err = manager.refresh(&first.refresh_token).await.unwrap_err();
        assert!(matches!(err, SessionError::Revoked));

        // The rotated-in token still works.
        manager.refresh(&second.refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_refreshed_access_token_verifies_same_subject() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        let pair = manager.login(subject).await.unwrap();
        let rotated = manager.refresh(&pair.refresh_token).await.unwrap();

        assert_eq!(
            manager.verify_access(&rotated.access_token).unwrap(),
            subject
        );
    }

    #[tokio::test]
    async fn test_logout_then_refresh_is_revoked() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        let pair = manager.login(subject).await.unwrap();
        manager.logout(&pair.refresh_token).await.unwrap();

        let err = manager.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, SessionError::Revoked));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent_on_invalid_tokens() {
        let manager = test_manager();

        // Malformed token: absorbed.
        manager.logout("definitely-not-a-jwt").await.unwrap();

        // Wrong class (an access token): absorbed.
        let pair = manager.login(Uuid::new_v4()).await.unwrap();
        manager.logout(&pair.access_token).await.unwrap();

        // Double logout: absorbed.
        manager.logout(&pair.refresh_token).await.unwrap();
        manager.logout(&pair.refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_second_login_supersedes_first() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        let first = manager.login(subject).await.unwrap();
        let second = manager.login(subject).await.unwrap();

        let err = manager.refresh(&first.refresh_token).await.unwrap_err();
        assert!(matches!(err, SessionError::Revoked));
        manager.refresh(&second.refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_access_token_survives_logout() {
        // Stateless access tokens cannot be revoked before expiry; this is
        // the documented trade-off, not a bug.
        let manager = test_manager();
        let subject = Uuid::new_v4();

        let pair = manager.login(subject).await.unwrap();
        manager.logout(&pair.refresh_token).await.unwrap();

        assert_eq!(manager.verify_access(&pair.access_token).unwrap(), subject);
    }

    #[tokio::test]
    async fn test_refresh_with_access_token_is_wrong_class() {
        let manager = test_manager();
        let pair = manager.login(Uuid::new_v4()).await.unwrap();

        let err = manager.refresh(&pair.access_token).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidToken(TokenError::WrongClass {
                expected: TokenClass::Refresh
            })
        ));
    }

    #[tokio::test]
    async fn test_refresh_without_any_session() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        // Forge a structurally valid refresh token whose subject has no
        // record: revoked, not malformed.
        let pair = manager.login(subject).await.unwrap();
        manager.logout(&pair.refresh_token).await.unwrap();
        let err = manager.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, SessionError::Revoked));
    }

    #[tokio::test]
    async fn test_full_lifecycle_scenario() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        // login("42") -> A1, R1
        let p1 = manager.login(subject).await.unwrap();

        // refresh(R1) -> A2, R2
        let p2 = manager.refresh(&p1.refresh_token).await.unwrap();

        // refresh(R1) again -> Revoked
        assert!(matches!(
            manager.refresh(&p1.refresh_token).await.unwrap_err(),
            SessionError::Revoked
        ));

        // refresh(R2) -> A3, R3
        let p3 = manager.refresh(&p2.refresh_token).await.unwrap();

        // logout(R3) -> success
        manager.logout(&p3.refresh_token).await.unwrap();

        // refresh(R3) -> Revoked
        assert!(matches!(
            manager.refresh(&p3.refresh_token).await.unwrap_err(),
            SessionError::Revoked
        ));
    }

    #[tokio::test]
    async fn test_concurrent_logins_leave_one_winner() {
        let manager = test_manager();
        let subject = Uuid::new_v4();

        let (a, b) = tokio::join!(manager.login(subject), manager.login(subject));
        let a = a.unwrap();
        let b = b.unwrap();

        // Both logins succeed individually, but at most one refresh token
        // can still be active afterwards (last store write wins).
        let a_ok = manager.refresh(&a.refresh_token).await.is_ok();
        let b_ok = manager.refresh(&b.refresh_token).await.is_ok();
        assert!(a_ok != b_ok, "exactly one of the two sessions must survive");
    }
}
