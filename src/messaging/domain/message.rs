//! Outbound message record.

use super::{CourseId, OutputChannel, UserId};
use crate::persistent::domain::{
    EntitySchema, FieldSpec, FieldType, FieldValue, PersistentDomainError, PersistentRecord,
    RecordFields, RecordMetadata, StoredRecord,
};

const COURSE_ID: &str = "course_id";
const USER_ID: &str = "user_id";
const OUTPUT_CHANNEL: &str = "output_channel";

const MESSAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(COURSE_ID, FieldType::Integer),
    FieldSpec::required(USER_ID, FieldType::Integer),
    FieldSpec::required(OUTPUT_CHANNEL, FieldType::Choice(OutputChannel::VALUES)),
];

/// Schema of the `messages` table. Messages support soft deletes.
pub const MESSAGE_SCHEMA: EntitySchema =
    EntitySchema::new("messages", MESSAGE_FIELDS).with_soft_deletes();

/// Typed field set for creating a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMessage {
    /// Course the message is sent within.
    pub course_id: CourseId,
    /// Authoring user.
    pub user_id: UserId,
    /// Delivery channel.
    pub output_channel: OutputChannel,
}

impl NewMessage {
    /// Creates a message field set.
    #[must_use]
    pub const fn new(course_id: CourseId, user_id: UserId, output_channel: OutputChannel) -> Self {
        Self {
            course_id,
            user_id,
            output_channel,
        }
    }
}

impl From<NewMessage> for RecordFields {
    fn from(message: NewMessage) -> Self {
        Self::from([
            (COURSE_ID.to_owned(), message.course_id.value().into()),
            (USER_ID.to_owned(), message.user_id.value().into()),
            (
                OUTPUT_CHANNEL.to_owned(),
                message.output_channel.as_str().into(),
            ),
        ])
    }
}

/// A persisted outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    metadata: RecordMetadata,
    course_id: CourseId,
    user_id: UserId,
    output_channel: OutputChannel,
}

impl Message {
    /// Returns the owning course id.
    #[must_use]
    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Returns the authoring user id.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the delivery channel.
    #[must_use]
    pub const fn output_channel(&self) -> OutputChannel {
        self.output_channel
    }

    /// Returns the soft-delete timestamp (`0` while active).
    #[must_use]
    pub fn time_deleted(&self) -> i64 {
        self.metadata.time_deleted().unwrap_or_default()
    }

    /// Returns whether `course` (an id or a course) owns this message.
    #[must_use]
    pub fn is_owned_by_course(&self, course: impl Into<CourseId>) -> bool {
        course.into() == self.course_id
    }

    /// Returns whether `user` (an id or a user) authored this message.
    #[must_use]
    pub fn is_owned_by_user(&self, user: impl Into<UserId>) -> bool {
        user.into() == self.user_id
    }
}

impl PersistentRecord for Message {
    const SCHEMA: EntitySchema = MESSAGE_SCHEMA;

    fn from_stored(record: StoredRecord) -> Result<Self, PersistentDomainError> {
        let schema = Self::SCHEMA;
        let mut row = record;
        let metadata = row.take_metadata(&schema)?;
        let course_id = CourseId::new(row.take_integer(&schema, COURSE_ID)?);
        let user_id = UserId::new(row.take_integer(&schema, USER_ID)?);
        let channel = row.take_text(&schema, OUTPUT_CHANNEL)?;
        let output_channel = OutputChannel::try_from(channel.as_str()).map_err(|err| {
            PersistentDomainError::MalformedRecord {
                table: schema.table(),
                reason: err.to_string(),
            }
        })?;
        row.ensure_consumed(&schema)?;

        Ok(Self {
            metadata,
            course_id,
            user_id,
            output_channel,
        })
    }

    fn field_values(&self) -> RecordFields {
        RecordFields::from([
            (COURSE_ID.to_owned(), FieldValue::Integer(self.course_id.value())),
            (USER_ID.to_owned(), FieldValue::Integer(self.user_id.value())),
            (
                OUTPUT_CHANNEL.to_owned(),
                FieldValue::from(self.output_channel.as_str()),
            ),
        ])
    }

    fn metadata(&self) -> &RecordMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RecordMetadata {
        &mut self.metadata
    }
}
