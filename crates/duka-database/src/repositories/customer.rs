//! Customer repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use duka_core::error::{AppError, ErrorKind};
use duka_core::result::AppResult;
use duka_entity::customer::{CreateCustomer, Customer};

/// Repository for customer lookup and registration.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Create a new customer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a customer by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find customer by id", e)
            })
    }

    /// Find a customer by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find customer by email", e)
            })
    }

    /// Register a new customer.
    pub async fn create(&self, data: &CreateCustomer) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (username, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("customers_email_key") =>
            {
                AppError::conflict(format!("{} is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create customer", e),
        })
    }
}
