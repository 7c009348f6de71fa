//! Order repository implementation.
//!
//! Order reads always join cart lines with product data and are scoped to
//! the owning customer; an order id from another customer behaves exactly
//! like a missing order.

use sqlx::PgPool;
use uuid::Uuid;

use duka_core::error::{AppError, ErrorKind};
use duka_core::result::AppResult;
use duka_entity::order::{Order, OrderItem, OrderLine};

const ORDER_LINE_SELECT: &str = "SELECT o.id AS order_id, p.id AS product_id, p.product_name, \
            p.price, p.category, p.stock, p.image, c.quantity \
     FROM orders o \
     JOIN cart c ON c.order_id = o.id \
     JOIN products p ON p.id = c.product_id";

/// Repository for order and cart operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all order lines for a customer, newest order first.
    pub async fn find_lines_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<OrderLine>> {
        let query = format!("{ORDER_LINE_SELECT} WHERE o.customer_id = $1 ORDER BY o.created_at DESC");
        sqlx::query_as::<_, OrderLine>(&query)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    /// Fetch the lines of a single order, scoped to the owning customer.
    pub async fn find_lines_for_order(
        &self,
        order_id: Uuid,
        customer_id: Uuid,
    ) -> AppResult<Vec<OrderLine>> {
        let query = format!("{ORDER_LINE_SELECT} WHERE o.id = $1 AND o.customer_id = $2");
        sqlx::query_as::<_, OrderLine>(&query)
            .bind(order_id)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))
    }

    /// Insert an order header row.
    pub async fn create(
        &self,
        payment_id: Uuid,
        customer_id: Uuid,
        amount_payable: i64,
        shipping_cost: i64,
    ) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (payment_id, customer_id, amount_payable, shipping_cost) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(payment_id)
        .bind(customer_id)
        .bind(amount_payable)
        .bind(shipping_cost)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))
    }

    /// Insert a cart line for an order.
    pub async fn add_item(
        &self,
        order_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> AppResult<OrderItem> {
        sqlx::query_as::<_, OrderItem>(
            "INSERT INTO cart (order_id, product_id, quantity) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add cart item", e))
    }

    /// Delete an order scoped to the owning customer, returning the deleted row.
    ///
    /// Cart lines are removed by the `ON DELETE CASCADE` constraint.
    pub async fn delete(&self, order_id: Uuid, customer_id: Uuid) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(
            "DELETE FROM orders WHERE id = $1 AND customer_id = $2 RETURNING *",
        )
        .bind(order_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete order", e))
    }
}
