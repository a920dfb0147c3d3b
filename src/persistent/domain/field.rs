//! Field types, values and declarations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named field values supplied on creation or read back from a store.
pub type RecordFields = BTreeMap<String, FieldValue>;

/// Semantic type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Signed 64-bit integer (identifiers, timestamps, counters).
    Integer,
    /// Free-form text.
    Text,
    /// Text restricted to a closed set of values.
    Choice(&'static [&'static str]),
}

impl FieldType {
    /// Returns the type name used in validation messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text | Self::Choice(_) => "text",
        }
    }

    /// Returns whether `value` has the storage shape of this type.
    ///
    /// Choice membership is checked separately so that a wrong type and a
    /// wrong value produce distinct errors.
    #[must_use]
    pub const fn accepts_shape(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Integer, FieldValue::Integer(_))
                | (Self::Text | Self::Choice(_), FieldValue::Text(_))
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A single stored field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value.
    Integer(i64),
    /// Text value.
    Text(String),
}

impl FieldValue {
    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Integer(_) => None,
        }
    }

    /// Returns the type name of the stored payload.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Text(value) => formatter.write_str(value),
        }
    }
}

/// Declaration of a caller-supplied field in an entity schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldType,
    required: bool,
}

impl FieldSpec {
    /// Declares a field that must be present on creation.
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// Declares a field that may be omitted on creation.
    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared field type.
    #[must_use]
    pub const fn kind(&self) -> FieldType {
        self.kind
    }

    /// Returns whether the field must be supplied on creation.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}
