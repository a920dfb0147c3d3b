//! In-memory implementation of the [`RecordStore`] port.
//!
//! Each table keeps its own id sequence, starting at 1. Ids are never
//! reused after a delete.

use crate::persistent::{
    domain::{RecordFields, RecordId, StoredRecord},
    ports::{RecordStore, RecordStoreError, RecordStoreResult},
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory row store.
///
/// Without a table allow-list every table name is accepted and created on
/// first write.
///
/// # Example
///
/// ```
/// use quickmail::persistent::adapters::memory::InMemoryRecordStore;
///
/// let store = InMemoryRecordStore::with_tables(["messages"]);
/// assert_eq!(store.row_count("messages"), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    allowed: Option<Vec<String>>,
    tables: HashMap<String, InMemoryTable>,
}

#[derive(Debug, Default)]
struct InMemoryTable {
    last_id: i64,
    rows: BTreeMap<RecordId, RecordFields>,
}

impl InMemoryStoreState {
    fn check_table(&self, table: &str) -> RecordStoreResult<()> {
        match &self.allowed {
            Some(allowed) if !allowed.iter().any(|name| name == table) => {
                Err(RecordStoreError::UnknownTable(table.to_owned()))
            }
            _ => Ok(()),
        }
    }
}

impl InMemoryRecordStore {
    /// Creates an empty store accepting any table name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store hosting only the named tables.
    #[must_use]
    pub fn with_tables<I, T>(tables: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let state = InMemoryStoreState {
            allowed: Some(tables.into_iter().map(Into::into).collect()),
            tables: HashMap::new(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the number of rows currently stored in `table`.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty store.
    #[must_use]
    pub fn row_count(&self, table: &str) -> usize {
        self.state
            .read()
            .map(|state| state.tables.get(table).map_or(0, |rows| rows.rows.len()))
            .unwrap_or(0)
    }
}

fn lock_error(err: impl std::fmt::Display) -> RecordStoreError {
    RecordStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(
        &self,
        table: &'static str,
        fields: RecordFields,
    ) -> RecordStoreResult<RecordId> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.check_table(table)?;

        let entry = state.tables.entry(table.to_owned()).or_default();
        entry.last_id += 1;
        let id = RecordId::new(entry.last_id);
        entry.rows.insert(id, fields);
        Ok(id)
    }

    async fn get(
        &self,
        table: &'static str,
        id: RecordId,
    ) -> RecordStoreResult<Option<StoredRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        state.check_table(table)?;

        Ok(state
            .tables
            .get(table)
            .and_then(|entry| entry.rows.get(&id))
            .map(|fields| StoredRecord::new(id, fields.clone())))
    }

    async fn update(&self, table: &'static str, record: &StoredRecord) -> RecordStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.check_table(table)?;

        let row = state
            .tables
            .get_mut(table)
            .and_then(|entry| entry.rows.get_mut(&record.id()))
            .ok_or(RecordStoreError::NotFound {
                table,
                id: record.id(),
            })?;
        row.clone_from(record.fields());
        Ok(())
    }

    async fn delete(&self, table: &'static str, id: RecordId) -> RecordStoreResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.check_table(table)?;

        Ok(state
            .tables
            .get_mut(table)
            .is_some_and(|entry| entry.rows.remove(&id).is_some()))
    }
}
