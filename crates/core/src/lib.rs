//! `bookshelf-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the catalog records, their identifiers, and the domain error model.

pub mod error;
pub mod id;
pub mod records;

pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use records::{Book, BookDraft, CartDraft, CartEntry, Category};
