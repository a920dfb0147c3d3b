//! Domain model for persistent records.
//!
//! Everything here is pure: schemas, field values, hydration and timestamp
//! formatting. Storage and time sources are reached through ports.

mod error;
mod field;
mod ids;
mod record;
mod schema;
mod timestamp;

pub use error::{Capability, PersistentDomainError, ValidationError};
pub use field::{FieldSpec, FieldType, FieldValue, RecordFields};
pub use ids::RecordId;
pub use record::{PersistentRecord, RecordMetadata, StoredRecord};
pub use schema::{EntitySchema, ID_FIELD, TIMECREATED_FIELD, TIMEDELETED_FIELD};
pub use timestamp::{READABLE_DATE_FORMAT, format_readable_date};
