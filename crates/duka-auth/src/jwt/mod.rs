//! JWT token codec.

pub mod claims;
pub mod codec;

pub use claims::{Claims, TokenClass};
pub use codec::{IssuedToken, TokenCodec, TokenPair};
