//! # duka-database
//!
//! PostgreSQL connection management and repository implementations for the
//! Duka storefront. Repositories are thin query wrappers; all errors map
//! into [`duka_core::AppError`] with the `Database` kind.

pub mod connection;
pub mod migration;
pub mod repositories;
