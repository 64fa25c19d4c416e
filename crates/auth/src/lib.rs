//! `bookshelf-auth` — pure authentication boundary (trust-on-claim).
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows how
//! to mint and verify signed identity tokens, nothing about cookies or
//! collections. Token issuance performs no credential check — the caller's
//! claimed identity is signed as-is and trusted only after verification.

pub mod claims;
pub mod token;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use token::{Hs256TokenCodec, TokenCodec, TokenError};
