//! Favorite repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use duka_core::error::{AppError, ErrorKind};
use duka_core::result::AppResult;
use duka_entity::favorite::{Favorite, FavoriteDetail};

const FAVORITE_DETAIL_SELECT: &str = "SELECT f.id AS favorite_id, p.id AS product_id, p.product_name, p.price, \
            p.price_type, p.category, p.stock, p.image \
     FROM favorites f \
     JOIN products p ON p.id = f.product_id";

/// Repository for customer favorites.
#[derive(Debug, Clone)]
pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    /// Create a new favorite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a customer's favorites joined with product data.
    pub async fn find_details_by_customer(
        &self,
        customer_id: Uuid,
    ) -> AppResult<Vec<FavoriteDetail>> {
        let query = format!("{FAVORITE_DETAIL_SELECT} WHERE f.customer_id = $1 ORDER BY f.created_at DESC");
        sqlx::query_as::<_, FavoriteDetail>(&query)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list favorites", e))
    }

    /// Fetch a single favorite with product data, scoped to the customer.
    pub async fn find_detail(
        &self,
        favorite_id: Uuid,
        customer_id: Uuid,
    ) -> AppResult<Option<FavoriteDetail>> {
        let query = format!("{FAVORITE_DETAIL_SELECT} WHERE f.id = $1 AND f.customer_id = $2");
        sqlx::query_as::<_, FavoriteDetail>(&query)
            .bind(favorite_id)
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find favorite", e))
    }

    /// Check whether the customer already favorited the product.
    pub async fn exists(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM favorites WHERE customer_id = $1 AND product_id = $2",
        )
        .bind(customer_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check favorite", e))?;
        Ok(count > 0)
    }

    /// Add a product to the customer's favorites.
    pub async fn create(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<Favorite> {
        sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (customer_id, product_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(customer_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create favorite", e))
    }

    /// Point an existing favorite at a different product, scoped to the customer.
    pub async fn update(
        &self,
        favorite_id: Uuid,
        customer_id: Uuid,
        product_id: Uuid,
    ) -> AppResult<Option<Favorite>> {
        sqlx::query_as::<_, Favorite>(
            "UPDATE favorites SET product_id = $3 \
             WHERE id = $1 AND customer_id = $2 RETURNING *",
        )
        .bind(favorite_id)
        .bind(customer_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update favorite", e))
    }

    /// Remove a favorite scoped to the customer, returning the deleted row.
    pub async fn delete(&self, favorite_id: Uuid, customer_id: Uuid) -> AppResult<Option<Favorite>> {
        sqlx::query_as::<_, Favorite>(
            "DELETE FROM favorites WHERE id = $1 AND customer_id = $2 RETURNING *",
        )
        .bind(favorite_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete favorite", e))
    }
}
