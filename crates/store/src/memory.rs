//! In-memory store for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use bookshelf_core::{Book, BookDraft, CartDraft, CartEntry, Category, RecordId};

use crate::error::StoreError;
use crate::report::{DeleteReport, UpdateReport};
use crate::traits::{CartStore, CatalogStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<HashMap<RecordId, Book>>,
    categories: RwLock<Vec<Category>>,
    cart: RwLock<HashMap<RecordId, CartEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category (the trait surface is read-only for categories; the
    /// reference data is seeded out of band, as in the external store).
    pub fn add_category(&self, name: impl Into<String>) -> Result<Category, StoreError> {
        let category = Category {
            id: RecordId::new(),
            name: name.into(),
        };
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories.push(category.clone());
        Ok(category)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn insert_book(&self, draft: BookDraft) -> Result<Book, StoreError> {
        let book = Book::from_draft(RecordId::new(), draft);
        let mut books = self.books.write().map_err(poisoned)?;
        books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn all_books(&self) -> Result<Vec<Book>, StoreError> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books.values().cloned().collect())
    }

    async fn book_by_id(&self, id: RecordId) -> Result<Option<Book>, StoreError> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books.get(&id).cloned())
    }

    async fn books_by_category(&self, category: &str) -> Result<Vec<Book>, StoreError> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books
            .values()
            .filter(|b| b.category == category)
            .cloned()
            .collect())
    }

    async fn replace_book(
        &self,
        id: RecordId,
        draft: BookDraft,
    ) -> Result<UpdateReport, StoreError> {
        let mut books = self.books.write().map_err(poisoned)?;
        match books.get_mut(&id) {
            Some(book) => {
                *book = Book::from_draft(id, draft);
                Ok(UpdateReport::matched(1))
            }
            None => Ok(UpdateReport::matched(0)),
        }
    }

    async fn set_book_quantity(
        &self,
        id: RecordId,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError> {
        let mut books = self.books.write().map_err(poisoned)?;
        match books.get_mut(&id) {
            Some(book) => {
                book.quantity = quantity;
                Ok(UpdateReport::matched(1))
            }
            None => Ok(UpdateReport::matched(0)),
        }
    }

    async fn all_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.clone())
    }
}

#[async_trait]
impl CartStore for MemoryStore {
    async fn insert_entry(&self, draft: CartDraft) -> Result<CartEntry, StoreError> {
        let entry = CartEntry::from_draft(RecordId::new(), draft);
        let mut cart = self.cart.write().map_err(poisoned)?;
        cart.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn entries_by_email(&self, email: &str) -> Result<Vec<CartEntry>, StoreError> {
        let cart = self.cart.read().map_err(poisoned)?;
        Ok(cart
            .values()
            .filter(|e| e.email == email)
            .cloned()
            .collect())
    }

    async fn delete_entry(&self, id: RecordId) -> Result<DeleteReport, StoreError> {
        let mut cart = self.cart.write().map_err(poisoned)?;
        let deleted = u64::from(cart.remove(&id).is_some());
        Ok(DeleteReport { deleted })
    }

    async fn upsert_entry_quantity(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError> {
        let mut cart = self.cart.write().map_err(poisoned)?;
        let mut matched = 0;
        for entry in cart.values_mut().filter(|e| e.name == name) {
            entry.quantity = quantity;
            matched += 1;
        }
        if matched > 0 {
            return Ok(UpdateReport::matched(matched));
        }

        let entry = CartEntry {
            id: RecordId::new(),
            email: String::new(),
            book_id: None,
            name: name.to_string(),
            image: None,
            quantity,
        };
        let id = entry.id;
        cart.insert(id, entry);
        Ok(UpdateReport::upserted(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, quantity: i64) -> BookDraft {
        BookDraft {
            name: name.to_string(),
            category: category.to_string(),
            image: "cover.png".to_string(),
            quantity,
            rating: 4.5,
            description: "a book".to_string(),
            author: "someone".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_lookup_by_id() {
        let store = MemoryStore::new();
        let book = store.insert_book(draft("Dune", "Sci-Fi", 3)).await.unwrap();
        let found = store.book_by_id(book.id).await.unwrap();
        assert_eq!(found, Some(book));
    }

    #[tokio::test]
    async fn replace_of_unknown_id_reports_zero_matches() {
        let store = MemoryStore::new();
        let report = store
            .replace_book(RecordId::new(), draft("Dune", "Sci-Fi", 3))
            .await
            .unwrap();
        assert_eq!(report.matched, 0);
        assert_eq!(report.upserted_id, None);
    }

    #[tokio::test]
    async fn category_filter_is_exact_and_empty_when_nothing_matches() {
        let store = MemoryStore::new();
        store.insert_book(draft("Dune", "Sci-Fi", 3)).await.unwrap();
        store
            .insert_book(draft("Emma", "Novel", 1))
            .await
            .unwrap();

        let scifi = store.books_by_category("Sci-Fi").await.unwrap();
        assert_eq!(scifi.len(), 1);
        assert_eq!(scifi[0].name, "Dune");

        assert!(store.books_by_category("History").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn borrow_sets_only_the_quantity() {
        let store = MemoryStore::new();
        let book = store.insert_book(draft("Dune", "Sci-Fi", 3)).await.unwrap();

        let report = store.set_book_quantity(book.id, 2).await.unwrap();
        assert_eq!(report.matched, 1);

        let after = store.book_by_id(book.id).await.unwrap().unwrap();
        assert_eq!(after.quantity, 2);
        assert_eq!(after.name, book.name);
        assert_eq!(after.rating, book.rating);
    }

    #[tokio::test]
    async fn cart_entries_are_filtered_by_owner_email() {
        let store = MemoryStore::new();
        let entry = CartDraft {
            email: "a@x.com".to_string(),
            book_id: None,
            name: "Dune".to_string(),
            image: None,
            quantity: 1,
        };
        store.insert_entry(entry.clone()).await.unwrap();
        store
            .insert_entry(CartDraft {
                email: "b@x.com".to_string(),
                ..entry
            })
            .await
            .unwrap();

        let mine = store.entries_by_email("a@x.com").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].email, "a@x.com");
    }

    #[tokio::test]
    async fn upsert_creates_then_updates_by_name() {
        let store = MemoryStore::new();

        let first = store.upsert_entry_quantity("Dune", 2).await.unwrap();
        assert_eq!(first.matched, 0);
        let id = first.upserted_id.expect("entry created");

        let second = store.upsert_entry_quantity("Dune", 5).await.unwrap();
        assert_eq!(second.matched, 1);
        assert_eq!(second.upserted_id, None);

        let cart = store.cart.read().unwrap();
        assert_eq!(cart.get(&id).unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn delete_of_unknown_entry_is_a_noop() {
        let store = MemoryStore::new();
        let report = store.delete_entry(RecordId::new()).await.unwrap();
        assert_eq!(report.deleted, 0);
    }
}
