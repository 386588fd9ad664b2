use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::core::filters::Filter;

/// Errors that can occur when querying the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid document in {collection}: {reason}")]
    InvalidDocument { collection: Collection, reason: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Aggregation failed: {0}")]
    Aggregation(String),
}

/// Collections held by the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Flights,
    Hotels,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Flights => "flights",
            Collection::Hotels => "hotels",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read access to a collection-oriented document store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every document in `collection` matching `filter`
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>, StoreError>;

    /// Whether the store is currently reachable
    async fn health_check(&self) -> bool;
}

/// Run `find` and deserialize each document into `T`
pub async fn find_records<T>(
    store: &dyn DocumentStore,
    collection: Collection,
    filter: &Filter,
) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
{
    let documents = store.find(collection, filter).await?;
    tracing::debug!("Fetched {} documents from {}", documents.len(), collection);

    documents
        .into_iter()
        .map(|doc| {
            serde_json::from_value(doc).map_err(|e| StoreError::InvalidDocument {
                collection,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Store used when no database connection could be set up at startup.
///
/// Every query fails, so requests are answered with a server error instead
/// of bringing the process down.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn find(&self, _collection: Collection, _filter: &Filter) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
