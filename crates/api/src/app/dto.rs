//! Request/response DTOs.
//!
//! Book and cart payloads deserialize straight into the core `*Draft`
//! types; only the auth surface and the small patch/query shapes need
//! dedicated DTOs.

use serde::{Deserialize, Serialize};

/// Identity claim presented to `POST /jwt`. Trust-on-claim: the email is
/// signed as-is, no credential check happens.
#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct IssueTokenResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

/// Quantity-only partial update (borrow and cart-quantity paths).
#[derive(Debug, Deserialize)]
pub struct QuantityPatch {
    pub quantity: i64,
}

/// Owner filter for the cart listing.
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: String,
}
