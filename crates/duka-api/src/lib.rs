//! # duka-api
//!
//! HTTP API layer for the Duka storefront using Axum: application state,
//! route definitions, request/response DTOs, thin handlers, and the
//! authentication extractor that gates protected routes.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
