//! Hydrated record state and the shared record capability trait.

use super::{
    Capability, EntitySchema, FieldValue, ID_FIELD, PersistentDomainError, RecordFields, RecordId,
    TIMECREATED_FIELD, TIMEDELETED_FIELD, format_readable_date,
};

/// A row as returned by a record store: primary key plus every other column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    id: RecordId,
    fields: RecordFields,
}

impl StoredRecord {
    /// Creates a stored record from its key and non-key columns.
    #[must_use]
    pub const fn new(id: RecordId, fields: RecordFields) -> Self {
        Self { id, fields }
    }

    /// Returns the primary key.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the non-key columns.
    #[must_use]
    pub const fn fields(&self) -> &RecordFields {
        &self.fields
    }

    /// Consumes the record, returning its key and non-key columns.
    #[must_use]
    pub fn into_parts(self) -> (RecordId, RecordFields) {
        (self.id, self.fields)
    }

    /// Removes an integer column, checking it against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::MalformedRecord`] when the column is
    /// missing or not an integer.
    pub fn take_integer(
        &mut self,
        schema: &EntitySchema,
        field: &str,
    ) -> Result<i64, PersistentDomainError> {
        match self.fields.remove(field) {
            Some(FieldValue::Integer(value)) => Ok(value),
            other => Err(malformed(schema, field, "integer", other.as_ref())),
        }
    }

    /// Removes a text column, checking it against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::MalformedRecord`] when the column is
    /// missing or not text.
    pub fn take_text(
        &mut self,
        schema: &EntitySchema,
        field: &str,
    ) -> Result<String, PersistentDomainError> {
        match self.fields.remove(field) {
            Some(FieldValue::Text(value)) => Ok(value),
            other => Err(malformed(schema, field, "text", other.as_ref())),
        }
    }

    /// Extracts the managed columns declared by `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::MalformedRecord`] when a managed
    /// column is missing or not an integer.
    pub fn take_metadata(
        &mut self,
        schema: &EntitySchema,
    ) -> Result<RecordMetadata, PersistentDomainError> {
        let time_created = self.take_integer(schema, TIMECREATED_FIELD)?;
        let time_deleted = if schema.supports_soft_deletes() {
            Some(self.take_integer(schema, TIMEDELETED_FIELD)?)
        } else {
            None
        };
        Ok(RecordMetadata {
            id: self.id,
            time_created,
            time_deleted,
        })
    }

    /// Fails when columns remain that the schema does not declare.
    ///
    /// Call after every declared column has been taken.
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::MalformedRecord`] naming the first
    /// leftover column.
    pub fn ensure_consumed(&self, schema: &EntitySchema) -> Result<(), PersistentDomainError> {
        match self.fields.keys().next() {
            Some(extra) => Err(PersistentDomainError::MalformedRecord {
                table: schema.table(),
                reason: format!("unexpected column '{extra}'"),
            }),
            None => Ok(()),
        }
    }
}

fn malformed(
    schema: &EntitySchema,
    field: &str,
    expected: &str,
    found: Option<&FieldValue>,
) -> PersistentDomainError {
    let reason = found.map_or_else(
        || format!("column '{field}' is missing"),
        |value| format!("column '{field}' expects {expected}, got {}", value.type_name()),
    );
    PersistentDomainError::MalformedRecord {
        table: schema.table(),
        reason,
    }
}

/// Managed columns of a hydrated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMetadata {
    id: RecordId,
    time_created: i64,
    time_deleted: Option<i64>,
}

impl RecordMetadata {
    /// Returns the primary key.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the creation timestamp in epoch seconds.
    #[must_use]
    pub const fn time_created(&self) -> i64 {
        self.time_created
    }

    /// Returns the soft-delete timestamp, or `None` without soft deletes.
    #[must_use]
    pub const fn time_deleted(&self) -> Option<i64> {
        self.time_deleted
    }

    /// Returns a copy flagged as soft deleted at `timestamp`.
    ///
    /// Has no effect on entities without a `timedeleted` column.
    #[must_use]
    pub const fn soft_deleted_at(self, timestamp: i64) -> Self {
        match self.time_deleted {
            Some(_) => Self {
                time_deleted: Some(timestamp),
                ..self
            },
            None => self,
        }
    }

    fn write_into(self, fields: &mut RecordFields) {
        fields.insert(
            TIMECREATED_FIELD.to_owned(),
            FieldValue::Integer(self.time_created),
        );
        if let Some(time_deleted) = self.time_deleted {
            fields.insert(
                TIMEDELETED_FIELD.to_owned(),
                FieldValue::Integer(time_deleted),
            );
        }
    }
}

/// Shared create/read/delete behaviour for a persisted entity.
///
/// Implementors declare their [`EntitySchema`] and how to move between the
/// typed record and its column map; field access, readable dates and
/// soft-delete state come for free. Storage operations are provided by
/// [`crate::persistent::services::RecordContext`].
pub trait PersistentRecord: Sized + Send + Sync {
    /// Table, field set and capabilities of this entity.
    const SCHEMA: EntitySchema;

    /// Builds the typed record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::MalformedRecord`] when the row does
    /// not match [`Self::SCHEMA`].
    fn from_stored(record: StoredRecord) -> Result<Self, PersistentDomainError>;

    /// Returns the caller-supplied columns (everything except managed ones).
    fn field_values(&self) -> RecordFields;

    /// Returns the managed columns.
    fn metadata(&self) -> &RecordMetadata;

    /// Returns the managed columns for in-place update.
    fn metadata_mut(&mut self) -> &mut RecordMetadata;

    /// Returns whether the entity type supports soft deletes.
    #[must_use]
    fn supports_soft_deletes() -> bool {
        Self::SCHEMA.supports_soft_deletes()
    }

    /// Returns the primary key.
    fn id(&self) -> RecordId {
        self.metadata().id()
    }

    /// Returns the creation timestamp in epoch seconds.
    fn time_created(&self) -> i64 {
        self.metadata().time_created()
    }

    /// Returns the current value of a schema field.
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::UnknownField`] when the schema does
    /// not declare `field`.
    fn get(&self, field: &str) -> Result<FieldValue, PersistentDomainError> {
        let unknown = || PersistentDomainError::UnknownField {
            table: Self::SCHEMA.table(),
            field: field.to_owned(),
        };
        if !Self::SCHEMA.has_field(field) {
            return Err(unknown());
        }
        if field == ID_FIELD {
            return Ok(FieldValue::Integer(self.id().value()));
        }
        self.to_stored()
            .fields
            .remove(field)
            .ok_or_else(unknown)
    }

    /// Formats an integer timestamp field as `YYYY-MM-DD HH:MM:SS` (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::UnknownField`] for undeclared fields,
    /// [`PersistentDomainError::NotATimestamp`] for text fields, and
    /// [`PersistentDomainError::TimestampOutOfRange`] when the value has no
    /// calendar representation.
    fn get_readable_date(&self, field: &str) -> Result<String, PersistentDomainError> {
        let table = Self::SCHEMA.table();
        let value = self
            .get(field)?
            .as_integer()
            .ok_or_else(|| PersistentDomainError::NotATimestamp {
                table,
                field: field.to_owned(),
            })?;
        format_readable_date(value).ok_or_else(|| PersistentDomainError::TimestampOutOfRange {
            table,
            field: field.to_owned(),
            value,
        })
    }

    /// Returns whether `timedeleted` is set to a positive timestamp.
    fn is_soft_deleted(&self) -> bool {
        self.metadata()
            .time_deleted()
            .is_some_and(|time_deleted| time_deleted > 0)
    }

    /// Fails unless the entity type supports soft deletes.
    ///
    /// # Errors
    ///
    /// Returns [`PersistentDomainError::Capability`] for entities without a
    /// `timedeleted` column.
    fn ensure_soft_deletes() -> Result<(), PersistentDomainError> {
        if Self::supports_soft_deletes() {
            Ok(())
        } else {
            Err(PersistentDomainError::Capability {
                table: Self::SCHEMA.table(),
                capability: Capability::SoftDelete,
            })
        }
    }

    /// Returns the full row representation of this record.
    fn to_stored(&self) -> StoredRecord {
        let mut fields = self.field_values();
        self.metadata().write_into(&mut fields);
        StoredRecord::new(self.id(), fields)
    }
}
