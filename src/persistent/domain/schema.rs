//! Entity schemas and creation-time validation.

use super::{FieldSpec, FieldType, FieldValue, RecordFields, ValidationError};

/// Primary key column present on every entity.
pub const ID_FIELD: &str = "id";

/// Creation timestamp column present on every entity.
pub const TIMECREATED_FIELD: &str = "timecreated";

/// Soft-delete timestamp column, present only on soft-delete entities.
pub const TIMEDELETED_FIELD: &str = "timedeleted";

/// Static description of a persisted entity.
///
/// `id` and `timecreated` are implied for every schema and `timedeleted`
/// is implied when soft deletes are enabled. Only caller-supplied fields
/// are listed in `fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    table: &'static str,
    fields: &'static [FieldSpec],
    soft_deletes: bool,
}

impl EntitySchema {
    /// Declares a schema without soft-delete support.
    #[must_use]
    pub const fn new(table: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            table,
            fields,
            soft_deletes: false,
        }
    }

    /// Enables the soft-delete capability (adds `timedeleted`).
    #[must_use]
    pub const fn with_soft_deletes(mut self) -> Self {
        self.soft_deletes = true;
        self
    }

    /// Returns the backing table name.
    #[must_use]
    pub const fn table(&self) -> &'static str {
        self.table
    }

    /// Returns the caller-supplied field declarations.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Returns whether the entity supports soft deletes.
    #[must_use]
    pub const fn supports_soft_deletes(&self) -> bool {
        self.soft_deletes
    }

    /// Returns the declaration of a caller-supplied field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name() == name)
    }

    /// Returns the system-managed column names for this schema.
    #[must_use]
    pub fn managed_fields(&self) -> &'static [&'static str] {
        if self.soft_deletes {
            &[ID_FIELD, TIMECREATED_FIELD, TIMEDELETED_FIELD]
        } else {
            &[ID_FIELD, TIMECREATED_FIELD]
        }
    }

    /// Returns whether `name` is a system-managed column of this schema.
    #[must_use]
    pub fn is_managed(&self, name: &str) -> bool {
        self.managed_fields().contains(&name)
    }

    /// Returns whether `name` is readable on hydrated records.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.is_managed(name) || self.field(name).is_some()
    }

    /// Returns every column name, managed fields first.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.managed_fields()
            .iter()
            .copied()
            .chain(self.fields.iter().map(FieldSpec::name))
    }

    /// Validates a caller-supplied field set for creation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a managed or undeclared field is
    /// supplied, a required field is missing, a value has the wrong type, or
    /// a choice value is not allowed.
    pub fn validate(&self, supplied: &RecordFields) -> Result<(), ValidationError> {
        for name in supplied.keys() {
            if let Some(&managed) = self
                .managed_fields()
                .iter()
                .find(|candidate| **candidate == name.as_str())
            {
                return Err(ValidationError::ManagedField {
                    table: self.table,
                    field: managed,
                });
            }
            if self.field(name).is_none() {
                return Err(ValidationError::UnexpectedField {
                    table: self.table,
                    field: name.clone(),
                });
            }
        }

        for spec in self.fields {
            match supplied.get(spec.name()) {
                Some(value) => self.validate_value(spec, value)?,
                None if spec.is_required() => {
                    return Err(ValidationError::MissingField {
                        table: self.table,
                        field: spec.name(),
                    });
                }
                None => {}
            }
        }

        Ok(())
    }

    fn validate_value(&self, spec: &FieldSpec, value: &FieldValue) -> Result<(), ValidationError> {
        if !spec.kind().accepts_shape(value) {
            return Err(ValidationError::TypeMismatch {
                table: self.table,
                field: spec.name(),
                expected: spec.kind().as_str(),
                found: value.type_name(),
            });
        }

        if let (FieldType::Choice(allowed), FieldValue::Text(text)) = (spec.kind(), value)
            && !allowed.contains(&text.as_str())
        {
            return Err(ValidationError::InvalidChoice {
                table: self.table,
                field: spec.name(),
                value: text.clone(),
            });
        }

        Ok(())
    }
}
