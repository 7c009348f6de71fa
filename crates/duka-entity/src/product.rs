//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product available in the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Product name, unique across the store.
    pub product_name: String,
    /// Unit price in minor currency units (cents).
    pub price: i64,
    /// How the price is quoted (e.g. "per item", "per kg").
    pub price_type: String,
    /// Product category.
    pub category: String,
    /// Units in stock.
    pub stock: i32,
    /// Stored image filename.
    pub image: String,
    /// When the product was added.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating or fully replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    /// Product name.
    pub product_name: String,
    /// Unit price in minor currency units.
    pub price: i64,
    /// How the price is quoted.
    pub price_type: String,
    /// Product category.
    pub category: String,
    /// Units in stock.
    pub stock: i32,
    /// Stored image filename.
    pub image: String,
}
