//! `bookshelf-store` — the document-store seam.
//!
//! Handlers talk to [`CatalogStore`] and [`CartStore`] trait objects; the
//! store itself is an external collaborator. Two implementations exist:
//! [`MemoryStore`] for tests/dev and [`PgStore`] for a persistent backend
//! holding records as JSONB documents.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod report;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use report::{DeleteReport, UpdateReport};
pub use traits::{CartStore, CatalogStore};
