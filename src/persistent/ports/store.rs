//! Row-store port keyed by table name and integer primary key.

use crate::persistent::domain::{RecordFields, RecordId, StoredRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record store operations.
pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

/// Generic row store used by every persistent entity.
///
/// Implementations serialise their own writers; callers issue one blocking
/// request at a time and never span a transaction across calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a row and returns its newly assigned primary key.
    ///
    /// `fields` holds every non-key column.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::UnknownTable`] when the store does not
    /// host `table`, or a persistence error when the write fails.
    async fn insert(&self, table: &'static str, fields: RecordFields)
    -> RecordStoreResult<RecordId>;

    /// Fetches a row by primary key.
    ///
    /// Returns `None` when no row has the given key.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::UnknownTable`] when the store does not
    /// host `table`, or a persistence error when the read fails.
    async fn get(&self, table: &'static str, id: RecordId)
    -> RecordStoreResult<Option<StoredRecord>>;

    /// Replaces every non-key column of an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the row does not exist.
    async fn update(&self, table: &'static str, record: &StoredRecord) -> RecordStoreResult<()>;

    /// Permanently removes a row.
    ///
    /// Returns `false` when no row had the given key.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::UnknownTable`] when the store does not
    /// host `table`, or a persistence error when the delete fails.
    async fn delete(&self, table: &'static str, id: RecordId) -> RecordStoreResult<bool>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    /// The store does not host the requested table.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The row does not exist.
    #[error("{table}: record {id} not found")]
    NotFound {
        /// Table that was queried.
        table: &'static str,
        /// Missing primary key.
        id: RecordId,
    },

    /// Persisted data could not be mapped to or from store columns.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordStoreError {
    /// Wraps a data-quality or mapping error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
