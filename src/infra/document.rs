//! The host document's head (title, meta description, Open Graph title) and
//! scroll position, as a write-only sink for navigation entry actions.

use crate::domain::navigation::PageMetadata;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};

pub trait DocumentSink: Send + Sync {
    fn apply_metadata(&self, metadata: &PageMetadata);
    fn scroll_to_origin(&self);
}

/// Last values written to the document, as a host would see them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHead {
    pub title: String,
    pub description: String,
    pub og_title: String,
    /// How many times the page was scrolled back to the origin.
    pub scroll_resets: u64,
}

/// Keeps the document head in memory.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    head: RwLock<DocumentHead>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head(&self) -> DocumentHead {
        self.head
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DocumentSink for InMemoryDocument {
    fn apply_metadata(&self, metadata: &PageMetadata) {
        let mut head = self.head.write().unwrap_or_else(PoisonError::into_inner);
        head.title = metadata.title.to_string();
        head.description = metadata.description.to_string();
        head.og_title = metadata.og_title.to_string();
    }

    fn scroll_to_origin(&self) {
        let mut head = self.head.write().unwrap_or_else(PoisonError::into_inner);
        head.scroll_resets += 1;
    }
}
