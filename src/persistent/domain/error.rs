//! Error types for record validation, field access and capabilities.

use thiserror::Error;

/// Optional behaviour an entity may or may not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Flagging a row as deleted through `timedeleted`.
    SoftDelete,
}

impl Capability {
    /// Returns the capability name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SoftDelete => "soft deletes",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Reasons a field set is rejected at creation time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied.
    #[error("{table}: required field '{field}' is missing")]
    MissingField {
        /// Backing table of the entity.
        table: &'static str,
        /// Missing field name.
        field: &'static str,
    },

    /// A field value has the wrong storage type.
    #[error("{table}: field '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        /// Backing table of the entity.
        table: &'static str,
        /// Offending field name.
        field: &'static str,
        /// Declared type name.
        expected: &'static str,
        /// Supplied type name.
        found: &'static str,
    },

    /// A choice field holds a value outside its allowed set.
    #[error("{table}: '{value}' is not an allowed value for field '{field}'")]
    InvalidChoice {
        /// Backing table of the entity.
        table: &'static str,
        /// Offending field name.
        field: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The field is not declared by the schema.
    #[error("{table}: field '{field}' is not part of the schema")]
    UnexpectedField {
        /// Backing table of the entity.
        table: &'static str,
        /// Undeclared field name.
        field: String,
    },

    /// The field is maintained by the persistence layer and cannot be supplied.
    #[error("{table}: field '{field}' is managed by the store and cannot be set")]
    ManagedField {
        /// Backing table of the entity.
        table: &'static str,
        /// System-managed field name.
        field: &'static str,
    },
}

/// Errors raised by record domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistentDomainError {
    /// The supplied field set failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `get` was called with a field the schema does not declare.
    #[error("{table}: unknown field '{field}'")]
    UnknownField {
        /// Backing table of the entity.
        table: &'static str,
        /// Requested field name.
        field: String,
    },

    /// The operation needs a capability the entity does not declare.
    #[error("{table} does not support {capability}")]
    Capability {
        /// Backing table of the entity.
        table: &'static str,
        /// Missing capability.
        capability: Capability,
    },

    /// A date was requested from a field that does not hold an integer.
    #[error("{table}: field '{field}' does not hold a timestamp")]
    NotATimestamp {
        /// Backing table of the entity.
        table: &'static str,
        /// Requested field name.
        field: String,
    },

    /// An integer timestamp cannot be represented as a calendar date.
    #[error("{table}: timestamp {value} in field '{field}' is out of range")]
    TimestampOutOfRange {
        /// Backing table of the entity.
        table: &'static str,
        /// Requested field name.
        field: String,
        /// Offending timestamp.
        value: i64,
    },

    /// A stored row does not match the entity schema.
    #[error("{table}: malformed stored record: {reason}")]
    MalformedRecord {
        /// Backing table of the entity.
        table: &'static str,
        /// Description of the mismatch.
        reason: String,
    },
}
