//! `PostgreSQL` record store for messages and recipients.

use super::{
    mapping::{
        MessagingTable, message_columns, message_row_to_stored, recipient_columns,
        recipient_row_to_stored,
    },
    models::{MessageRecipientRow, MessageRow},
    schema::{message_recipients, messages},
};
use crate::persistent::{
    domain::{RecordFields, RecordId, StoredRecord},
    ports::{RecordStore, RecordStoreError, RecordStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::debug;

/// `PostgreSQL` connection pool type used by the messaging store.
pub type MessagingPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed [`RecordStore`] hosting `messages` and
/// `message_recipients`.
#[derive(Debug, Clone)]
pub struct PostgresMessagingStore {
    pool: MessagingPgPool,
}

impl PostgresMessagingStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, operation: F) -> RecordStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RecordStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RecordStoreError::persistence)?;
            operation(&mut connection)
        })
        .await
        .map_err(RecordStoreError::persistence)?
    }
}

#[async_trait]
impl RecordStore for PostgresMessagingStore {
    async fn insert(
        &self,
        table: &'static str,
        fields: RecordFields,
    ) -> RecordStoreResult<RecordId> {
        let id = match MessagingTable::resolve(table)? {
            MessagingTable::Messages => {
                let columns = message_columns(&fields)?;
                self.run_blocking(move |connection| {
                    diesel::insert_into(messages::table)
                        .values(&columns)
                        .returning(messages::id)
                        .get_result::<i64>(connection)
                        .map_err(RecordStoreError::persistence)
                })
                .await?
            }
            MessagingTable::Recipients => {
                let columns = recipient_columns(&fields)?;
                self.run_blocking(move |connection| {
                    diesel::insert_into(message_recipients::table)
                        .values(&columns)
                        .returning(message_recipients::id)
                        .get_result::<i64>(connection)
                        .map_err(RecordStoreError::persistence)
                })
                .await?
            }
        };
        debug!(table, id, "row inserted");
        Ok(RecordId::new(id))
    }

    async fn get(
        &self,
        table: &'static str,
        id: RecordId,
    ) -> RecordStoreResult<Option<StoredRecord>> {
        let key = id.value();
        match MessagingTable::resolve(table)? {
            MessagingTable::Messages => {
                self.run_blocking(move |connection| {
                    let row = messages::table
                        .find(key)
                        .select(MessageRow::as_select())
                        .first::<MessageRow>(connection)
                        .optional()
                        .map_err(RecordStoreError::persistence)?;
                    Ok(row.map(message_row_to_stored))
                })
                .await
            }
            MessagingTable::Recipients => {
                self.run_blocking(move |connection| {
                    let row = message_recipients::table
                        .find(key)
                        .select(MessageRecipientRow::as_select())
                        .first::<MessageRecipientRow>(connection)
                        .optional()
                        .map_err(RecordStoreError::persistence)?;
                    Ok(row.map(recipient_row_to_stored))
                })
                .await
            }
        }
    }

    async fn update(&self, table: &'static str, record: &StoredRecord) -> RecordStoreResult<()> {
        let id = record.id();
        let key = id.value();
        let updated_count = match MessagingTable::resolve(table)? {
            MessagingTable::Messages => {
                let columns = message_columns(record.fields())?;
                self.run_blocking(move |connection| {
                    diesel::update(messages::table.find(key))
                        .set(&columns)
                        .execute(connection)
                        .map_err(RecordStoreError::persistence)
                })
                .await?
            }
            MessagingTable::Recipients => {
                let columns = recipient_columns(record.fields())?;
                self.run_blocking(move |connection| {
                    diesel::update(message_recipients::table.find(key))
                        .set(&columns)
                        .execute(connection)
                        .map_err(RecordStoreError::persistence)
                })
                .await?
            }
        };

        if updated_count == 0 {
            return Err(RecordStoreError::NotFound { table, id });
        }
        Ok(())
    }

    async fn delete(&self, table: &'static str, id: RecordId) -> RecordStoreResult<bool> {
        let key = id.value();
        let deleted_count = match MessagingTable::resolve(table)? {
            MessagingTable::Messages => {
                self.run_blocking(move |connection| {
                    diesel::delete(messages::table.find(key))
                        .execute(connection)
                        .map_err(RecordStoreError::persistence)
                })
                .await?
            }
            MessagingTable::Recipients => {
                self.run_blocking(move |connection| {
                    diesel::delete(message_recipients::table.find(key))
                        .execute(connection)
                        .map_err(RecordStoreError::persistence)
                })
                .await?
            }
        };
        Ok(deleted_count > 0)
    }
}
