//! Address and default-address repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use duka_core::error::{AppError, ErrorKind};
use duka_core::result::AppResult;
use duka_entity::address::{Address, AddressData, DefaultAddress, DefaultAddressDetail};

/// Repository for customer delivery addresses and the default-address marker.
#[derive(Debug, Clone)]
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    /// Create a new address repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all addresses for a customer.
    pub async fn find_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Address>> {
        sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list addresses", e))
    }

    /// Fetch a single address scoped to the customer.
    pub async fn find_by_id(&self, address_id: Uuid, customer_id: Uuid) -> AppResult<Option<Address>> {
        sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE id = $1 AND customer_id = $2",
        )
        .bind(address_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find address", e))
    }

    /// Check whether an identical address (same delivery line and phone) exists.
    pub async fn duplicate_exists(
        &self,
        delivery_address: &str,
        mobile_phone_number: &str,
    ) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM addresses \
             WHERE delivery_address = $1 AND mobile_phone_number = $2",
        )
        .bind(delivery_address)
        .bind(mobile_phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check address duplicate", e)
        })?;
        Ok(count > 0)
    }

    /// Create a new address for a customer.
    pub async fn create(&self, customer_id: Uuid, data: &AddressData) -> AppResult<Address> {
        sqlx::query_as::<_, Address>(
            "INSERT INTO addresses (customer_id, first_name, last_name, mobile_phone_number, \
                                    alternate_phone_number, delivery_address, county, town) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(customer_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.mobile_phone_number)
        .bind(&data.alternate_phone_number)
        .bind(&data.delivery_address)
        .bind(&data.county)
        .bind(&data.town)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create address", e))
    }

    /// Fully replace an address, scoped to the customer.
    pub async fn update(
        &self,
        address_id: Uuid,
        customer_id: Uuid,
        data: &AddressData,
    ) -> AppResult<Option<Address>> {
        sqlx::query_as::<_, Address>(
            "UPDATE addresses SET first_name = $3, last_name = $4, mobile_phone_number = $5, \
                                  alternate_phone_number = $6, delivery_address = $7, \
                                  county = $8, town = $9, updated_at = NOW() \
             WHERE id = $1 AND customer_id = $2 RETURNING *",
        )
        .bind(address_id)
        .bind(customer_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.mobile_phone_number)
        .bind(&data.alternate_phone_number)
        .bind(&data.delivery_address)
        .bind(&data.county)
        .bind(&data.town)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update address", e))
    }

    /// Delete an address scoped to the customer, returning the deleted row.
    pub async fn delete(&self, address_id: Uuid, customer_id: Uuid) -> AppResult<Option<Address>> {
        sqlx::query_as::<_, Address>(
            "DELETE FROM addresses WHERE id = $1 AND customer_id = $2 RETURNING *",
        )
        .bind(address_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete address", e))
    }

    // ── Default address ────────────────────────────────────────

    /// Fetch the customer's default address joined with its address data.
    pub async fn find_default_detail(
        &self,
        customer_id: Uuid,
    ) -> AppResult<Option<DefaultAddressDetail>> {
        sqlx::query_as::<_, DefaultAddressDetail>(
            "SELECT d.id AS default_address_id, a.id AS address_id, a.first_name, a.last_name, \
                    a.mobile_phone_number, a.alternate_phone_number, a.delivery_address, \
                    a.county, a.town \
             FROM default_addresses d \
             JOIN addresses a ON a.id = d.address_id \
             WHERE d.customer_id = $1",
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find default address", e)
        })
    }

    /// Check whether the given address is already the customer's default.
    pub async fn default_is_set_to(&self, customer_id: Uuid, address_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM default_addresses WHERE customer_id = $1 AND address_id = $2",
        )
        .bind(customer_id)
        .bind(address_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check default address", e)
        })?;
        Ok(count > 0)
    }

    /// Check whether the customer has any default address set.
    pub async fn has_default(&self, customer_id: Uuid) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM default_addresses WHERE customer_id = $1")
                .bind(customer_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check default address", e)
                })?;
        Ok(count > 0)
    }

    /// Set the customer's default address.
    pub async fn set_default(&self, customer_id: Uuid, address_id: Uuid) -> AppResult<DefaultAddress> {
        sqlx::query_as::<_, DefaultAddress>(
            "INSERT INTO default_addresses (customer_id, address_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(customer_id)
        .bind(address_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set default address", e)
        })
    }

    /// Point the customer's default marker at a different address.
    pub async fn update_default(
        &self,
        customer_id: Uuid,
        address_id: Uuid,
    ) -> AppResult<Option<DefaultAddress>> {
        sqlx::query_as::<_, DefaultAddress>(
            "UPDATE default_addresses SET address_id = $2 WHERE customer_id = $1 RETURNING *",
        )
        .bind(customer_id)
        .bind(address_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update default address", e)
        })
    }

    /// Remove the customer's default marker, returning the deleted row.
    pub async fn delete_default(&self, customer_id: Uuid) -> AppResult<Option<DefaultAddress>> {
        sqlx::query_as::<_, DefaultAddress>(
            "DELETE FROM default_addresses WHERE customer_id = $1 RETURNING *",
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete default address", e)
        })
    }
}
