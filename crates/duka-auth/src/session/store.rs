//! Cache-backed session record storage.
//!
//! One record per subject: the `jti` of the refresh token currently
//! considered valid. Writing a record overwrites any prior one, which is
//! how the at-most-one-session-per-subject invariant is enforced. The
//! record's TTL mirrors the refresh token's expiry so stale records vanish
//! without any cleanup job.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use duka_cache::keys;
use duka_cache::provider::CacheManager;
use duka_core::config::auth::AuthConfig;
use duka_core::traits::cache::CacheProvider;

use crate::error::SessionError;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// The system-of-record for whether a refresh token is still usable.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Cache backend holding the records.
    cache: Arc<CacheManager>,
    /// Record TTL, mirroring the refresh token TTL.
    record_ttl: Duration,
}

impl SessionStore {
    /// Creates a new session store over the given cache backend.
    pub fn new(cache: Arc<CacheManager>, config: &AuthConfig) -> Self {
        Self {
            cache,
            record_ttl: Duration::from_secs(config.refresh_ttl_days * SECONDS_PER_DAY),
        }
    }

    /// Upserts the session record for a subject.
    ///
    /// Overwrites any prior record for the same subject; the displaced
    /// refresh token becomes unusable even though it has not expired.
    pub async fn put(&self, subject: Uuid, refresh_jti: Uuid) -> Result<(), SessionError> {
        self.cache
            .set(&keys::session(subject), &refresh_jti.to_string(), self.record_ttl)
            .await
            .map_err(SessionError::StoreUnavailable)
    }

    /// Looks up the current refresh token identity for a subject.
    ///
    /// Absence means no active session (revoked or expired). A record that
    /// fails to parse is treated as absent rather than an error.
    pub async fn get(&self, subject: Uuid) -> Result<Option<Uuid>, SessionError> {
        let value = self
            .cache
            .get(&keys::session(subject))
            .await
            .map_err(SessionError::StoreUnavailable)?;

        Ok(value.and_then(|v| v.parse().ok()))
    }

    /// Removes the session record for a subject. Idempotent.
    pub async fn delete(&self, subject: Uuid) -> Result<(), SessionError> {
        self.cache
            .delete(&keys::session(subject))
            .await
            .map_err(SessionError::StoreUnavailable)
    }
}
