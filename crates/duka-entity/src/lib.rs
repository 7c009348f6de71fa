//! # duka-entity
//!
//! Domain entity models for the Duka storefront: customers, products,
//! orders, favorites, addresses, and payments. All models derive
//! `sqlx::FromRow` for direct mapping from PostgreSQL rows.

pub mod address;
pub mod customer;
pub mod favorite;
pub mod order;
pub mod payment;
pub mod product;
