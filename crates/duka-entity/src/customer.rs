//! Customer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered customer.
///
/// The customer ID is the authentication subject: once assigned it is
/// immutable and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: Uuid,
    /// Display name chosen at registration.
    pub username: String,
    /// Unique email address used for login.
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the customer registered.
    pub created_at: DateTime<Utc>,
    /// When the customer record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomer {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
