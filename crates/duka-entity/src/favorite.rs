//! Favorite entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A customer's favorited product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    /// Unique favorite identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Favorited product.
    pub product_id: Uuid,
    /// When the product was favorited.
    pub created_at: DateTime<Utc>,
}

/// A favorite joined with its product data, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoriteDetail {
    /// The favorite identifier.
    pub favorite_id: Uuid,
    /// The favorited product.
    pub product_id: Uuid,
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
    /// Product image filename.
    pub image: String,
}
