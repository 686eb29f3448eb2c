pub mod connection;
pub mod models;
pub mod service;

pub use connection::{get_connection, DbPool};
pub use models::*;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use service::DbService;

const MAX_LISTED_COLLECTIONS: usize = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document store not available: {0}")]
    Unavailable(String),
    #[error("Database Error: {0}")]
    Database(#[from] duckdb::Error),
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Document store lock poisoned")]
    LockPoisoned,
}

/// Create/query access to a collection-oriented document store.
///
/// Every operation returns a `StoreError` instead of panicking, including when
/// nothing is configured at all, so callers can pick a degraded path.
pub trait DocumentStore: Send + Sync {
    fn name(&self) -> &str;

    fn create(&self, collection: &str, record: &Value) -> Result<Uuid, StoreError>;

    /// Documents whose body matches every `filter` entry. A missing key matches `null`.
    fn query(&self, collection: &str, filter: &Map<String, Value>) -> Result<Vec<Document>, StoreError>;

    /// Up to ten collection names, for diagnostics.
    fn collections(&self) -> Result<Vec<String>, StoreError>;
}

pub fn matches_filter(body: &Value, filter: &Map<String, Value>) -> bool {
    filter
        .iter()
        .all(|(key, expected)| body.get(key).unwrap_or(&Value::Null) == expected)
}

pub struct DuckDbStore {
    pool: DbPool,
}

impl DuckDbStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        if !config.is_configured() {
            return Err(StoreError::Unavailable("no database url configured".to_string()));
        }
        Ok(Self::new(get_connection(config)?))
    }
}

impl DocumentStore for DuckDbStore {
    fn name(&self) -> &str {
        "duckdb"
    }

    fn create(&self, collection: &str, record: &Value) -> Result<Uuid, StoreError> {
        let conn = self.pool.lock().map_err(|_| StoreError::LockPoisoned)?;
        let id = DbService::insert_document(&conn, collection, record)?;
        debug!("Stored document {} in {}", id, collection);
        Ok(id)
    }

    fn query(&self, collection: &str, filter: &Map<String, Value>) -> Result<Vec<Document>, StoreError> {
        // String equality is narrowed in SQL; the exact JSON comparison below covers the rest.
        let string_fields: Vec<(&str, &str)> = filter
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v)))
            .collect();

        let conn = self.pool.lock().map_err(|_| StoreError::LockPoisoned)?;
        let documents = DbService::find_documents(&conn, collection, &string_fields)?;
        Ok(documents
            .into_iter()
            .filter(|doc| matches_filter(&doc.body, filter))
            .collect())
    }

    fn collections(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.pool.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(DbService::list_collections(&conn, MAX_LISTED_COLLECTIONS)?)
    }
}

/// Stand-in used when no database is configured or it failed to open.
pub struct OfflineStore {
    reason: String,
}

impl OfflineStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl DocumentStore for OfflineStore {
    fn name(&self) -> &str {
        "offline"
    }

    fn create(&self, _collection: &str, _record: &Value) -> Result<Uuid, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }

    fn query(&self, _collection: &str, _filter: &Map<String, Value>) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }

    fn collections(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

/// Opens the configured store, or falls back to an `OfflineStore` so the service still starts.
pub fn open_store(config: &DatabaseConfig) -> std::sync::Arc<dyn DocumentStore> {
    match DuckDbStore::open(config) {
        Ok(store) => std::sync::Arc::new(store),
        Err(e) => {
            warn!("Running without chat persistence: {}", e);
            std::sync::Arc::new(OfflineStore::new(e.to_string()))
        }
    }
}
