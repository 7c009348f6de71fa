//! Product repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use duka_core::error::{AppError, ErrorKind};
use duka_core::result::AppResult;
use duka_entity::product::{Product, ProductData};

/// Repository for product CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all products, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    /// Find a product by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by id", e)
            })
    }

    /// Find a product by its unique name.
    pub async fn find_by_name(&self, product_name: &str) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE product_name = $1")
            .bind(product_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by name", e)
            })
    }

    /// Create a new product.
    pub async fn create(&self, data: &ProductData) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (product_name, price, price_type, category, stock, image) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.product_name)
        .bind(data.price)
        .bind(&data.price_type)
        .bind(&data.category)
        .bind(data.stock)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("products_product_name_key") =>
            {
                AppError::conflict(format!("{} is already in store", data.product_name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create product", e),
        })
    }

    /// Fully replace a product's fields. Returns `None` if the product is gone.
    pub async fn update(&self, id: Uuid, data: &ProductData) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET product_name = $2, price = $3, price_type = $4, \
                                 category = $5, stock = $6, image = $7, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.product_name)
        .bind(data.price)
        .bind(&data.price_type)
        .bind(&data.category)
        .bind(data.stock)
        .bind(&data.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))
    }

    /// Delete a product, returning the deleted row.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("DELETE FROM products WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete product", e))
    }
}
