//! Store contracts for the three record collections.
//!
//! One method per route-level store operation; no pagination, no filtering
//! beyond simple equality matches. Implementations must not treat "nothing
//! matched" as an error.

use async_trait::async_trait;
use std::sync::Arc;

use bookshelf_core::{Book, BookDraft, CartDraft, CartEntry, Category, RecordId};

use crate::error::StoreError;
use crate::report::{DeleteReport, UpdateReport};

/// Books and categories.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a new book; the store assigns the identifier.
    async fn insert_book(&self, draft: BookDraft) -> Result<Book, StoreError>;

    async fn all_books(&self) -> Result<Vec<Book>, StoreError>;

    async fn book_by_id(&self, id: RecordId) -> Result<Option<Book>, StoreError>;

    /// Books whose category equals `category` (exact match).
    async fn books_by_category(&self, category: &str) -> Result<Vec<Book>, StoreError>;

    /// Full field replace. Unknown ids report `matched == 0`, no upsert.
    async fn replace_book(&self, id: RecordId, draft: BookDraft)
    -> Result<UpdateReport, StoreError>;

    /// Partial update of quantity only (the borrow path). No upsert.
    async fn set_book_quantity(
        &self,
        id: RecordId,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError>;

    async fn all_categories(&self) -> Result<Vec<Category>, StoreError>;
}

/// Per-user cart entries.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Insert a new cart entry; the store assigns the identifier.
    async fn insert_entry(&self, draft: CartDraft) -> Result<CartEntry, StoreError>;

    /// Entries whose owner email equals `email` (exact match).
    async fn entries_by_email(&self, email: &str) -> Result<Vec<CartEntry>, StoreError>;

    async fn delete_entry(&self, id: RecordId) -> Result<DeleteReport, StoreError>;

    /// Set quantity on the entry matched by `name`, inserting a minimal
    /// entry when none matches (upsert).
    async fn upsert_entry_quantity(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError>;
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn insert_book(&self, draft: BookDraft) -> Result<Book, StoreError> {
        (**self).insert_book(draft).await
    }

    async fn all_books(&self) -> Result<Vec<Book>, StoreError> {
        (**self).all_books().await
    }

    async fn book_by_id(&self, id: RecordId) -> Result<Option<Book>, StoreError> {
        (**self).book_by_id(id).await
    }

    async fn books_by_category(&self, category: &str) -> Result<Vec<Book>, StoreError> {
        (**self).books_by_category(category).await
    }

    async fn replace_book(
        &self,
        id: RecordId,
        draft: BookDraft,
    ) -> Result<UpdateReport, StoreError> {
        (**self).replace_book(id, draft).await
    }

    async fn set_book_quantity(
        &self,
        id: RecordId,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError> {
        (**self).set_book_quantity(id, quantity).await
    }

    async fn all_categories(&self) -> Result<Vec<Category>, StoreError> {
        (**self).all_categories().await
    }
}

#[async_trait]
impl<S> CartStore for Arc<S>
where
    S: CartStore + ?Sized,
{
    async fn insert_entry(&self, draft: CartDraft) -> Result<CartEntry, StoreError> {
        (**self).insert_entry(draft).await
    }

    async fn entries_by_email(&self, email: &str) -> Result<Vec<CartEntry>, StoreError> {
        (**self).entries_by_email(email).await
    }

    async fn delete_entry(&self, id: RecordId) -> Result<DeleteReport, StoreError> {
        (**self).delete_entry(id).await
    }

    async fn upsert_entry_quantity(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError> {
        (**self).upsert_entry_quantity(name, quantity).await
    }
}
