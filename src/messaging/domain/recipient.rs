//! Recipient attached to a message.

use super::{Message, UserId};
use crate::persistent::domain::{
    EntitySchema, FieldSpec, FieldType, FieldValue, PersistentDomainError, PersistentRecord,
    RecordFields, RecordId, RecordMetadata, StoredRecord,
};

pub(crate) const MESSAGE_ID_FIELD: &str = "message_id";
const USER_ID: &str = "user_id";

const RECIPIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(MESSAGE_ID_FIELD, FieldType::Integer),
    FieldSpec::required(USER_ID, FieldType::Integer),
];

/// Schema of the `message_recipients` table. Recipients are hard delete only.
pub const MESSAGE_RECIPIENT_SCHEMA: EntitySchema =
    EntitySchema::new("message_recipients", RECIPIENT_FIELDS);

/// Typed field set for creating a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMessageRecipient {
    /// Parent message.
    pub message_id: RecordId,
    /// Receiving user.
    pub user_id: UserId,
}

impl NewMessageRecipient {
    /// Creates a recipient field set for `message`.
    #[must_use]
    pub fn for_message(message: &Message, user_id: UserId) -> Self {
        Self {
            message_id: message.id(),
            user_id,
        }
    }
}

impl From<NewMessageRecipient> for RecordFields {
    fn from(recipient: NewMessageRecipient) -> Self {
        Self::from([
            (MESSAGE_ID_FIELD.to_owned(), recipient.message_id.value().into()),
            (USER_ID.to_owned(), recipient.user_id.value().into()),
        ])
    }
}

/// A persisted message recipient.
///
/// `message_id` is a lookup reference only; deleting the message leaves
/// its recipients in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecipient {
    metadata: RecordMetadata,
    message_id: RecordId,
    user_id: UserId,
}

impl MessageRecipient {
    /// Returns the parent message id.
    #[must_use]
    pub const fn message_id(&self) -> RecordId {
        self.message_id
    }

    /// Returns the receiving user id.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl PersistentRecord for MessageRecipient {
    const SCHEMA: EntitySchema = MESSAGE_RECIPIENT_SCHEMA;

    fn from_stored(record: StoredRecord) -> Result<Self, PersistentDomainError> {
        let schema = Self::SCHEMA;
        let mut row = record;
        let metadata = row.take_metadata(&schema)?;
        let message_id = RecordId::new(row.take_integer(&schema, MESSAGE_ID_FIELD)?);
        let user_id = UserId::new(row.take_integer(&schema, USER_ID)?);
        row.ensure_consumed(&schema)?;

        Ok(Self {
            metadata,
            message_id,
            user_id,
        })
    }

    fn field_values(&self) -> RecordFields {
        RecordFields::from([
            (
                MESSAGE_ID_FIELD.to_owned(),
                FieldValue::Integer(self.message_id.value()),
            ),
            (USER_ID.to_owned(), FieldValue::Integer(self.user_id.value())),
        ])
    }

    fn metadata(&self) -> &RecordMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RecordMetadata {
        &mut self.metadata
    }
}
