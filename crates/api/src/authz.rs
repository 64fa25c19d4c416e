//! API-side ownership guard for per-user resources.
//!
//! The cart endpoints return data scoped to an owner email; this check is
//! applied once per route instead of being re-implemented inline, so a user
//! cannot read another user's cart by query manipulation.

use thiserror::Error;

use crate::context::UserContext;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("forbidden: cart owner mismatch")]
    OwnerMismatch,
}

/// Allow access only when the verified identity owns the requested data.
///
/// - No IO
/// - No panics
/// - Exact email equality (no normalization)
pub fn require_owner(user: &UserContext, requested_email: &str) -> Result<(), OwnershipError> {
    if user.email() == requested_email {
        Ok(())
    } else {
        Err(OwnershipError::OwnerMismatch)
    }
}
