use super::delivery::DeliveryAdapter;
use crate::error::DeliveryFailure;
use std::sync::Mutex;

/// A document handed to [`MemoryDelivery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

/// Keeps delivered documents in memory instead of persisting them.
#[derive(Debug, Default)]
pub struct MemoryDelivery {
    documents: Mutex<Vec<SavedDocument>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents saved so far, oldest first
    pub fn saved(&self) -> Vec<SavedDocument> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Remove and return every saved document
    pub fn take(&self) -> Vec<SavedDocument> {
        let mut documents = self
            .documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *documents)
    }

    pub fn len(&self) -> usize {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DeliveryAdapter for MemoryDelivery {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn save(
        &self,
        content: &str,
        filename: &str,
        mime_type: &str,
    ) -> std::result::Result<(), DeliveryFailure> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| "memory delivery store is poisoned")?;

        documents.push(SavedDocument {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}
