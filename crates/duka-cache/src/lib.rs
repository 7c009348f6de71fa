//! # duka-cache
//!
//! Cache providers for the Duka storefront. The [`provider::CacheManager`]
//! dispatches to Redis or an in-memory backend based on configuration; the
//! session store uses it as its system-of-record for refresh-token records.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;
