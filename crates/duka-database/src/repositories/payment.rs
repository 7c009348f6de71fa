//! Payment repository implementation.

use sqlx::PgPool;

use duka_core::error::{AppError, ErrorKind};
use duka_core::result::AppResult;
use duka_entity::payment::Payment;

/// Repository for recorded payments.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a payment by the provider's checkout request id.
    pub async fn find_by_checkout_request_id(
        &self,
        checkout_request_id: &str,
    ) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE checkout_request_id = $1")
            .bind(checkout_request_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find payment", e))
    }
}
