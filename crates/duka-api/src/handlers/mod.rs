//! HTTP request handlers, one module per resource.

pub mod address;
pub mod auth;
pub mod favorite;
pub mod health;
pub mod order;
pub mod product;
