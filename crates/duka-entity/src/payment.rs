//! Payment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded mobile-money payment.
///
/// Rows are written by the payment callback pipeline; order creation only
/// reads them to validate the presented checkout request id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// Checkout request id issued by the payment provider.
    pub checkout_request_id: String,
    /// Paid amount in minor currency units.
    pub amount: i64,
    /// Paying phone number, when reported by the provider.
    pub phone_number: Option<String>,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
}
