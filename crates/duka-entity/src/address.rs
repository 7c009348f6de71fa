//! Delivery address entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A customer delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Address {
    /// Unique address identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Recipient first name.
    pub first_name: String,
    /// Recipient last name.
    pub last_name: String,
    /// Primary contact number.
    pub mobile_phone_number: String,
    /// Optional secondary contact number.
    pub alternate_phone_number: Option<String>,
    /// Street / building delivery address.
    pub delivery_address: String,
    /// County.
    pub county: String,
    /// Town.
    pub town: String,
    /// When the address was created.
    pub created_at: DateTime<Utc>,
    /// When the address was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating or fully replacing an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressData {
    /// Recipient first name.
    pub first_name: String,
    /// Recipient last name.
    pub last_name: String,
    /// Primary contact number.
    pub mobile_phone_number: String,
    /// Optional secondary contact number.
    pub alternate_phone_number: Option<String>,
    /// Street / building delivery address.
    pub delivery_address: String,
    /// County.
    pub county: String,
    /// Town.
    pub town: String,
}

/// The default-address marker row for a customer.
///
/// At most one row exists per customer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DefaultAddress {
    /// Unique marker identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// The address marked as default.
    pub address_id: Uuid,
}

/// The default address joined with its address data, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DefaultAddressDetail {
    /// The marker identifier.
    pub default_address_id: Uuid,
    /// The address identifier.
    pub address_id: Uuid,
    /// Recipient first name.
    pub first_name: String,
    /// Recipient last name.
    pub last_name: String,
    /// Primary contact number.
    pub mobile_phone_number: String,
    /// Optional secondary contact number.
    pub alternate_phone_number: Option<String>,
    /// Street / building delivery address.
    pub delivery_address: String,
    /// County.
    pub county: String,
    /// Town.
    pub town: String,
}
