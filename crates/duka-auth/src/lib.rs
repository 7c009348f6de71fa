//! # duka-auth
//!
//! Authentication core for the Duka storefront: the JWT token codec, the
//! cache-backed session store, the session lifecycle manager, and Argon2id
//! password hashing.
//!
//! A session moves through four logical states, each transition being a
//! single atomic store operation:
//!
//! ```text
//! NoSession --login--> Active --refresh--> Active (rotated)
//!                        |
//!                      logout / TTL expiry
//!                        v
//!                     NoSession (revoked)
//! ```
//!
//! Access tokens are stateless and verify against the signature and expiry
//! alone; refresh tokens additionally require the server-side session
//! record to point at their `jti`.

pub mod error;
pub mod jwt;
pub mod password;
pub mod session;

pub use error::{SessionError, TokenError};
pub use jwt::{Claims, TokenClass, TokenCodec, TokenPair};
pub use password::PasswordHasher;
pub use session::{SessionManager, SessionStore};
