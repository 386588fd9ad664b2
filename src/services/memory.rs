use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::core::filters::Filter;
use crate::services::store::{Collection, DocumentStore, StoreError};

/// In-process document store
///
/// Evaluates the same filter semantics as the PostgreSQL store over JSON
/// documents held in memory. Documents are returned in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<(Collection, Value)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `documents` in `collection`
    pub fn with_documents(mut self, collection: Collection, documents: impl IntoIterator<Item = Value>) -> Self {
        self.documents
            .get_mut()
            .extend(documents.into_iter().map(|doc| (collection, doc)));
        self
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>, StoreError> {
        let documents = self.documents.read().await;

        Ok(documents
            .iter()
            .filter(|(c, doc)| *c == collection && filter.matches(doc))
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
