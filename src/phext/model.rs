use crate::coordinate::Coordinate;
use crate::document::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub id: Uuid,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Current position in the document, like an address bar.
    #[serde(default)]
    pub coordinate: Coordinate,
}

impl Metadata {
    pub fn new(label: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            label,
            created_at: now,
            updated_at: now,
            coordinate: Coordinate::ORIGIN,
        }
    }
}

/// A labelled document as it sits in a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhext {
    pub metadata: Metadata,
    pub raw: String,
}

impl StoredPhext {
    pub fn new(label: String, raw: String) -> Self {
        Self {
            metadata: Metadata::new(label),
            raw,
        }
    }

    pub fn document(&self) -> Document {
        Document::new(self.raw.clone())
    }

    /// Swaps in a new document and bumps `updated_at`.
    pub fn set_document(&mut self, document: Document) {
        self.raw = document.into_raw();
        self.metadata.updated_at = Utc::now();
    }
}
