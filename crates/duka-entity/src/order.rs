//! Order entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An order header row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// The payment this order settles against.
    pub payment_id: Uuid,
    /// The customer who placed the order.
    pub customer_id: Uuid,
    /// Total payable in minor currency units.
    pub amount_payable: i64,
    /// Shipping cost in minor currency units.
    pub shipping_cost: i64,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// A single cart line belonging to an order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// The order this line belongs to.
    pub order_id: Uuid,
    /// The purchased product.
    pub product_id: Uuid,
    /// Quantity purchased.
    pub quantity: i32,
}

/// An order line joined with its product data, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderLine {
    /// The order identifier.
    pub order_id: Uuid,
    /// The purchased product.
    pub product_id: Uuid,
    /// Product name at query time.
    pub product_name: String,
    /// Unit price in minor currency units.
    pub price: i64,
    /// Product category.
    pub category: String,
    /// Units currently in stock.
    pub stock: i32,
    /// Product image filename.
    pub image: String,
    /// Quantity purchased.
    pub quantity: i32,
}
