//! Conversions between generic record columns and Diesel row models.

use super::models::{MessageColumns, MessageRecipientColumns, MessageRecipientRow, MessageRow};
use crate::messaging::domain::{MESSAGE_RECIPIENT_SCHEMA, MESSAGE_SCHEMA};
use crate::persistent::{
    domain::{FieldValue, RecordFields, RecordId, StoredRecord},
    ports::{RecordStoreError, RecordStoreResult},
};
use thiserror::Error;

/// Tables hosted by the `PostgreSQL` messaging store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagingTable {
    /// The `messages` table.
    Messages,
    /// The `message_recipients` table.
    Recipients,
}

impl MessagingTable {
    /// Resolves a table name.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::UnknownTable`] for tables this store
    /// does not host.
    pub fn resolve(table: &str) -> RecordStoreResult<Self> {
        if table == MESSAGE_SCHEMA.table() {
            Ok(Self::Messages)
        } else if table == MESSAGE_RECIPIENT_SCHEMA.table() {
            Ok(Self::Recipients)
        } else {
            Err(RecordStoreError::UnknownTable(table.to_owned()))
        }
    }
}

/// A record column could not be mapped onto the table's row model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{table}.{column}: {reason}")]
pub struct ColumnMappingError {
    table: &'static str,
    column: &'static str,
    reason: &'static str,
}

fn integer(
    fields: &RecordFields,
    table: &'static str,
    column: &'static str,
) -> RecordStoreResult<i64> {
    match fields.get(column) {
        Some(FieldValue::Integer(value)) => Ok(*value),
        Some(FieldValue::Text(_)) => Err(mapping_error(table, column, "expected an integer")),
        None => Err(mapping_error(table, column, "column is missing")),
    }
}

fn text(
    fields: &RecordFields,
    table: &'static str,
    column: &'static str,
) -> RecordStoreResult<String> {
    match fields.get(column) {
        Some(FieldValue::Text(value)) => Ok(value.clone()),
        Some(FieldValue::Integer(_)) => Err(mapping_error(table, column, "expected text")),
        None => Err(mapping_error(table, column, "column is missing")),
    }
}

fn mapping_error(
    table: &'static str,
    column: &'static str,
    reason: &'static str,
) -> RecordStoreError {
    RecordStoreError::invalid_persisted_data(ColumnMappingError {
        table,
        column,
        reason,
    })
}

/// Builds message columns from a generic field map.
///
/// # Errors
///
/// Returns [`RecordStoreError::InvalidPersistedData`] when a column is
/// missing or has the wrong type.
pub fn message_columns(fields: &RecordFields) -> RecordStoreResult<MessageColumns> {
    let table = MESSAGE_SCHEMA.table();
    Ok(MessageColumns {
        course_id: integer(fields, table, "course_id")?,
        user_id: integer(fields, table, "user_id")?,
        output_channel: text(fields, table, "output_channel")?,
        timecreated: integer(fields, table, "timecreated")?,
        timedeleted: integer(fields, table, "timedeleted")?,
    })
}

/// Builds recipient columns from a generic field map.
///
/// # Errors
///
/// Returns [`RecordStoreError::InvalidPersistedData`] when a column is
/// missing or has the wrong type.
pub fn recipient_columns(fields: &RecordFields) -> RecordStoreResult<MessageRecipientColumns> {
    let table = MESSAGE_RECIPIENT_SCHEMA.table();
    Ok(MessageRecipientColumns {
        message_id: integer(fields, table, "message_id")?,
        user_id: integer(fields, table, "user_id")?,
        timecreated: integer(fields, table, "timecreated")?,
    })
}

/// Converts a message row into a stored record.
pub fn message_row_to_stored(row: MessageRow) -> StoredRecord {
    let MessageRow {
        id,
        course_id,
        user_id,
        output_channel,
        timecreated,
        timedeleted,
    } = row;
    StoredRecord::new(
        RecordId::new(id),
        RecordFields::from([
            ("course_id".to_owned(), FieldValue::Integer(course_id)),
            ("user_id".to_owned(), FieldValue::Integer(user_id)),
            ("output_channel".to_owned(), FieldValue::Text(output_channel)),
            ("timecreated".to_owned(), FieldValue::Integer(timecreated)),
            ("timedeleted".to_owned(), FieldValue::Integer(timedeleted)),
        ]),
    )
}

/// Converts a recipient row into a stored record.
pub fn recipient_row_to_stored(row: MessageRecipientRow) -> StoredRecord {
    let MessageRecipientRow {
        id,
        message_id,
        user_id,
        timecreated,
    } = row;
    StoredRecord::new(
        RecordId::new(id),
        RecordFields::from([
            ("message_id".to_owned(), FieldValue::Integer(message_id)),
            ("user_id".to_owned(), FieldValue::Integer(user_id)),
            ("timecreated".to_owned(), FieldValue::Integer(timecreated)),
        ]),
    )
}
