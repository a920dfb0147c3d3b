//! Store-and-clock handle that performs record persistence.
//!
//! [`RecordContext`] is the explicit replacement for a global database
//! handle: every create, lookup and delete is issued through it, so tests
//! can supply in-memory stores and fixed clocks.

use crate::persistent::{
    domain::{
        PersistentDomainError, PersistentRecord, RecordFields, RecordId, StoredRecord,
        TIMECREATED_FIELD, TIMEDELETED_FIELD,
    },
    ports::{RecordStore, RecordStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for record persistence.
#[derive(Debug, Error)]
pub enum RecordContextError {
    /// Validation, field access or capability failure.
    #[error(transparent)]
    Domain(#[from] PersistentDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

impl RecordContextError {
    /// Returns the domain error, if this is one.
    #[must_use]
    pub const fn as_domain(&self) -> Option<&PersistentDomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Store(_) => None,
        }
    }
}

/// Result type for record context operations.
pub type RecordContextResult<T> = Result<T, RecordContextError>;

/// Persistence handle shared by every record type.
#[derive(Clone)]
pub struct RecordContext<S, C>
where
    S: RecordStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> RecordContext<S, C>
where
    S: RecordStore,
    C: Clock + Send + Sync,
{
    /// Creates a new context over `store`, stamping times from `clock`.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn now(&self) -> i64 {
        self.clock.utc().timestamp()
    }

    /// Validates `fields`, inserts a new row and returns the hydrated record.
    ///
    /// `timecreated` is stamped from the clock and, for soft-delete
    /// entities, `timedeleted` starts at `0`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordContextError::Domain`] wrapping a
    /// [`crate::persistent::domain::ValidationError`] when the field set is
    /// rejected (nothing is written), or [`RecordContextError::Store`] when
    /// the insert fails.
    pub async fn create_new<R>(&self, fields: RecordFields) -> RecordContextResult<R>
    where
        R: PersistentRecord,
    {
        let schema = R::SCHEMA;
        schema
            .validate(&fields)
            .map_err(PersistentDomainError::from)?;

        let mut row = fields;
        row.insert(TIMECREATED_FIELD.to_owned(), self.now().into());
        if schema.supports_soft_deletes() {
            row.insert(TIMEDELETED_FIELD.to_owned(), 0_i64.into());
        }

        let id = self.store.insert(schema.table(), row.clone()).await?;
        debug!(table = schema.table(), id = id.value(), "record created");
        Ok(R::from_stored(StoredRecord::new(id, row))?)
    }

    /// Fetches a record by primary key.
    ///
    /// Soft-deleted rows are returned like any other row. Returns `Ok(None)`
    /// when no row has the given key.
    ///
    /// # Errors
    ///
    /// Returns [`RecordContextError::Store`] when the lookup fails or
    /// [`RecordContextError::Domain`] when the stored row is malformed.
    pub async fn find_or_null<R>(&self, id: RecordId) -> RecordContextResult<Option<R>>
    where
        R: PersistentRecord,
    {
        let table = R::SCHEMA.table();
        let found = self.store.get(table, id).await?;
        debug!(table, id = id.value(), found = found.is_some(), "record lookup");
        Ok(found.map(R::from_stored).transpose()?)
    }

    /// Permanently removes the record's row.
    ///
    /// A later [`Self::find_or_null`] for its id returns `None`. The caller
    /// keeps `record`, so a failed delete can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] (wrapped) when the row has
    /// already gone, or a store error when the delete fails.
    pub async fn hard_delete<R>(&self, record: &R) -> RecordContextResult<()>
    where
        R: PersistentRecord,
    {
        let table = R::SCHEMA.table();
        let id = record.id();
        if !self.store.delete(table, id).await? {
            return Err(RecordStoreError::NotFound { table, id }.into());
        }
        info!(table, id = id.value(), "record hard deleted");
        Ok(())
    }

    /// Flags the record as deleted by stamping `timedeleted`.
    ///
    /// The row stays retrievable. The record is updated in place only after
    /// the store accepted the write; an already soft-deleted record is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RecordContextError::Domain`] wrapping
    /// [`PersistentDomainError::Capability`] when the entity does not
    /// support soft deletes, [`PersistentDomainError::TimestampOutOfRange`]
    /// when the clock reads at or before the epoch (nothing is written), or
    /// a store error when the update fails.
    pub async fn soft_delete<R>(&self, record: &mut R) -> RecordContextResult<()>
    where
        R: PersistentRecord,
    {
        let table = R::SCHEMA.table();
        if let Err(err) = R::ensure_soft_deletes() {
            warn!(table, id = record.id().value(), "soft delete rejected");
            return Err(err.into());
        }
        if record.is_soft_deleted() {
            debug!(table, id = record.id().value(), "record already soft deleted");
            return Ok(());
        }

        let now = self.now();
        if now <= 0 {
            warn!(
                table,
                id = record.id().value(),
                now,
                "soft delete clock is not after the epoch"
            );
            return Err(PersistentDomainError::TimestampOutOfRange {
                table,
                field: TIMEDELETED_FIELD.to_owned(),
                value: now,
            }
            .into());
        }
        let flagged = record.metadata().soft_deleted_at(now);
        let row = with_time_deleted(record.to_stored(), now);
        self.store.update(table, &row).await?;

        *record.metadata_mut() = flagged;
        info!(table, id = record.id().value(), "record soft deleted");
        Ok(())
    }
}

fn with_time_deleted(record: StoredRecord, time_deleted: i64) -> StoredRecord {
    let (id, mut fields) = record.into_parts();
    fields.insert(TIMEDELETED_FIELD.to_owned(), time_deleted.into());
    StoredRecord::new(id, fields)
}
