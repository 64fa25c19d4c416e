use serde::{Deserialize, Serialize};

use bookshelf_core::RecordId;

/// Result of an update/replace against the store.
///
/// A write that matches no record is a **successful no-op** (`matched == 0`),
/// mirroring the idempotent update semantics of the underlying store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReport {
    pub matched: u64,
    pub modified: u64,

    /// Identifier of a record created by an upsert, when one was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<RecordId>,
}

impl UpdateReport {
    pub fn matched(count: u64) -> Self {
        Self {
            matched: count,
            modified: count,
            upserted_id: None,
        }
    }

    pub fn upserted(id: RecordId) -> Self {
        Self {
            matched: 0,
            modified: 0,
            upserted_id: Some(id),
        }
    }
}

/// Result of a delete against the store. Deleting a missing record is a
/// successful no-op (`deleted == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReport {
    pub deleted: u64,
}
