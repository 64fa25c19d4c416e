//! Postgres-backed document store.
//!
//! Records are held as JSONB documents keyed by UUID, keeping the store
//! schemaless from the service's point of view. One connection pool is
//! created at process startup and shared across all requests.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use uuid::Uuid;

use bookshelf_core::{Book, BookDraft, CartDraft, CartEntry, Category, RecordId};

use crate::error::StoreError;
use crate::report::{DeleteReport, UpdateReport};
use crate::traits::{CartStore, CatalogStore};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a long-lived pool to the store.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tracing::debug!("document store pool connected");
        Ok(Self { pool })
    }

    /// Create the backing tables when they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for ddl in [
            "CREATE TABLE IF NOT EXISTS books (id UUID PRIMARY KEY, doc JSONB NOT NULL)",
            "CREATE TABLE IF NOT EXISTS categories (id UUID PRIMARY KEY, name TEXT NOT NULL UNIQUE)",
            "CREATE TABLE IF NOT EXISTS cart_entries (id UUID PRIMARY KEY, doc JSONB NOT NULL)",
        ] {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }
}

fn book_from_row(row: &PgRow) -> Result<Book, StoreError> {
    let id: Uuid = row.try_get("id").map_err(StoreError::from)?;
    let doc: JsonValue = row.try_get("doc").map_err(StoreError::from)?;
    let draft: BookDraft =
        serde_json::from_value(doc).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok(Book::from_draft(RecordId::from_uuid(id), draft))
}

fn entry_from_row(row: &PgRow) -> Result<CartEntry, StoreError> {
    let id: Uuid = row.try_get("id").map_err(StoreError::from)?;
    let doc: JsonValue = row.try_get("doc").map_err(StoreError::from)?;
    let draft: CartDraft =
        serde_json::from_value(doc).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok(CartEntry::from_draft(RecordId::from_uuid(id), draft))
}

fn to_doc<T: serde::Serialize>(value: &T) -> Result<JsonValue, StoreError> {
    serde_json::to_value(value).map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn insert_book(&self, draft: BookDraft) -> Result<Book, StoreError> {
        let id = RecordId::new();
        sqlx::query("INSERT INTO books (id, doc) VALUES ($1, $2)")
            .bind(id.as_uuid())
            .bind(to_doc(&draft)?)
            .execute(&self.pool)
            .await?;
        Ok(Book::from_draft(id, draft))
    }

    async fn all_books(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query("SELECT id, doc FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(book_from_row).collect()
    }

    async fn book_by_id(&self, id: RecordId) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query("SELECT id, doc FROM books WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(book_from_row).transpose()
    }

    async fn books_by_category(&self, category: &str) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query("SELECT id, doc FROM books WHERE doc->>'category' = $1 ORDER BY id")
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(book_from_row).collect()
    }

    async fn replace_book(
        &self,
        id: RecordId,
        draft: BookDraft,
    ) -> Result<UpdateReport, StoreError> {
        let result = sqlx::query("UPDATE books SET doc = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(to_doc(&draft)?)
            .execute(&self.pool)
            .await?;
        Ok(UpdateReport::matched(result.rows_affected()))
    }

    async fn set_book_quantity(
        &self,
        id: RecordId,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError> {
        let result = sqlx::query(
            "UPDATE books SET doc = jsonb_set(doc, '{quantity}', to_jsonb($2::BIGINT)) \
             WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(quantity)
        .execute(&self.pool)
        .await?;
        Ok(UpdateReport::matched(result.rows_affected()))
    }

    async fn all_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| {
                let id: Uuid = row.try_get("id").map_err(StoreError::from)?;
                let name: String = row.try_get("name").map_err(StoreError::from)?;
                Ok(Category {
                    id: RecordId::from_uuid(id),
                    name,
                })
            })
            .collect()
    }
}

#[async_trait]
impl CartStore for PgStore {
    async fn insert_entry(&self, draft: CartDraft) -> Result<CartEntry, StoreError> {
        let id = RecordId::new();
        sqlx::query("INSERT INTO cart_entries (id, doc) VALUES ($1, $2)")
            .bind(id.as_uuid())
            .bind(to_doc(&draft)?)
            .execute(&self.pool)
            .await?;
        Ok(CartEntry::from_draft(id, draft))
    }

    async fn entries_by_email(&self, email: &str) -> Result<Vec<CartEntry>, StoreError> {
        let rows =
            sqlx::query("SELECT id, doc FROM cart_entries WHERE doc->>'email' = $1 ORDER BY id")
                .bind(email)
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(entry_from_row).collect()
    }

    async fn delete_entry(&self, id: RecordId) -> Result<DeleteReport, StoreError> {
        let result = sqlx::query("DELETE FROM cart_entries WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(DeleteReport {
            deleted: result.rows_affected(),
        })
    }

    async fn upsert_entry_quantity(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<UpdateReport, StoreError> {
        let result = sqlx::query(
            "UPDATE cart_entries SET doc = jsonb_set(doc, '{quantity}', to_jsonb($2::BIGINT)) \
             WHERE doc->>'name' = $1",
        )
        .bind(name)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(UpdateReport::matched(result.rows_affected()));
        }

        let draft = CartDraft {
            email: String::new(),
            book_id: None,
            name: name.to_string(),
            image: None,
            quantity,
        };
        let entry = self.insert_entry(draft).await?;
        Ok(UpdateReport::upserted(entry.id))
    }
}
