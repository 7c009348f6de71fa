//! Signed, time-limited token creation and verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use duka_core::config::auth::AuthConfig;
use duka_core::error::AppError;

use crate::error::TokenError;

use super::claims::{Claims, TokenClass};

/// A freshly signed token together with its claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded, signed token string.
    pub token: String,
    /// The claims embedded in the token.
    pub claims: Claims,
}

/// An access/refresh token pair as handed to clients.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Creates and verifies signed, time-limited tokens.
///
/// A pure function over the signing secret: verification has no side
/// effects and never touches the session store.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Access token TTL.
    access_ttl: chrono::Duration,
    /// Refresh token TTL.
    refresh_ttl: chrono::Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            access_ttl: chrono::Duration::minutes(config.access_ttl_minutes as i64),
            refresh_ttl: chrono::Duration::days(config.refresh_ttl_days as i64),
        }
    }

    /// Signs a new token of the given class for the subject.
    ///
    /// Fails only on signing-key misconfiguration, which is fatal rather
    /// than a per-request condition.
    pub fn issue(&self, subject: Uuid, class: TokenClass) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let ttl = match class {
            TokenClass::Access => self.access_ttl,
            TokenClass::Refresh => self.refresh_ttl,
        };

        let claims = Claims {
            sub: subject,
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            token_class: class,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode {class} token: {e}")))?;

        Ok(IssuedToken { token, claims })
    }

    /// Decodes and validates a token, checking signature, expiry, and class.
    pub fn verify(&self, token: &str, expected: TokenClass) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.token_class != expected {
            return Err(TokenError::WrongClass { expected });
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duka_core::config::auth::AuthConfig;

    fn test_codec() -> TokenCodec {
        TokenCodec::new(&AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            ..AuthConfig::default()
        })
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let codec = test_codec();
        let subject = Uuid::new_v4();

        let issued = codec.issue(subject, TokenClass::Access).unwrap();
        let claims = codec.verify(&issued.token, TokenClass::Access).unwrap();

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.jti, issued.claims.jti);
        assert_eq!(claims.token_class, TokenClass::Access);
    }

    #[test]
    fn test_wrong_class_rejected_both_ways() {
        let codec = test_codec();
        let subject = Uuid::new_v4();

        let access = codec.issue(subject, TokenClass::Access).unwrap();
        let refresh = codec.issue(subject, TokenClass::Refresh).unwrap();

        assert_eq!(
            codec.verify(&access.token, TokenClass::Refresh).unwrap_err(),
            TokenError::WrongClass {
                expected: TokenClass::Refresh
            }
        );
        assert_eq!(
            codec.verify(&refresh.token, TokenClass::Access).unwrap_err(),
            TokenError::WrongClass {
                expected: TokenClass::Access
            }
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = test_codec();
        assert_eq!(
            codec.verify("not-a-jwt", TokenClass::Access).unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_foreign_signature_is_malformed() {
        let codec = test_codec();
        let other = TokenCodec::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        });

        let issued = other.issue(Uuid::new_v4(), TokenClass::Access).unwrap();
        assert_eq!(
            codec.verify(&issued.token, TokenClass::Access).unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = test_codec();
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            jti: Uuid::new_v4(),
            iat: (now - chrono::Duration::hours(2)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
            token_class: TokenClass::Access,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        assert_eq!(
            codec.verify(&token, TokenClass::Access).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_identical_inputs_verify_identically() {
        let codec = test_codec();
        let issued = codec.issue(Uuid::new_v4(), TokenClass::Refresh).unwrap();

        let first = codec.verify(&issued.token, TokenClass::Refresh).unwrap();
        let second = codec.verify(&issued.token, TokenClass::Refresh).unwrap();
        assert_eq!(first.jti, second.jti);
        assert_eq!(first.exp, second.exp);
    }
}
