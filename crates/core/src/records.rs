//! Catalog and cart records.
//!
//! A `*Draft` is the client-supplied field set (what arrives in a request
//! body); the corresponding record pairs those fields with the identifier
//! the store assigned on insert.

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Client-supplied book fields (insert and full-replace payloads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub name: String,
    pub category: String,
    pub image: String,
    pub quantity: i64,
    pub rating: f64,
    pub description: String,
    pub author: String,
}

/// A book record as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub image: String,
    pub quantity: i64,
    pub rating: f64,
    pub description: String,
    pub author: String,
}

impl Book {
    pub fn from_draft(id: RecordId, draft: BookDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            image: draft.image,
            quantity: draft.quantity,
            rating: draft.rating,
            description: draft.description,
            author: draft.author,
        }
    }

    /// The draft view of this record (fields without the identifier).
    pub fn draft(&self) -> BookDraft {
        BookDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
            quantity: self.quantity,
            rating: self.rating,
            description: self.description.clone(),
            author: self.author.clone(),
        }
    }
}

/// Read-only reference record used to populate navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
}

/// Client-supplied cart fields.
///
/// `book_id` is optional: entries created through the quantity upsert path
/// carry only a name and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDraft {
    pub email: String,
    #[serde(default)]
    pub book_id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: i64,
}

/// A cart entry owned by `email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub book_id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: i64,
}

impl CartEntry {
    pub fn from_draft(id: RecordId, draft: CartDraft) -> Self {
        Self {
            id,
            email: draft.email,
            book_id: draft.book_id,
            name: draft.name,
            image: draft.image,
            quantity: draft.quantity,
        }
    }
}
