//! Typed constructors and owner lookups for messages and recipients.

use crate::messaging::{
    domain::{
        Course, CourseId, MESSAGE_ID_FIELD, Message, MessageRecipient, NewMessage,
        NewMessageRecipient, User, UserId,
    },
    ports::{CourseDirectory, DirectoryError, UserDirectory},
};
use crate::persistent::{
    domain::{PersistentRecord, RecordFields, RecordId},
    ports::RecordStore,
    services::{RecordContext, RecordContextError},
};
use mockable::Clock;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for messaging operations.
#[derive(Debug, Error)]
pub enum MessagingServiceError {
    /// Record persistence failed.
    #[error(transparent)]
    Record(#[from] RecordContextError),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// The referenced course does not exist.
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    /// The referenced user does not exist.
    #[error("user {0} not found")]
    UserNotFound(UserId),
    /// The referenced message does not exist.
    #[error("message {0} not found")]
    MessageNotFound(RecordId),
}

/// Result type for messaging service operations.
pub type MessagingServiceResult<T> = Result<T, MessagingServiceError>;

impl Message {
    /// Creates and persists a message from typed fields.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingServiceError::Record`] when validation or the
    /// insert fails.
    pub async fn create<S, C>(
        context: &RecordContext<S, C>,
        fields: NewMessage,
    ) -> MessagingServiceResult<Self>
    where
        S: RecordStore,
        C: Clock + Send + Sync,
    {
        Ok(context.create_new(fields.into()).await?)
    }

    /// Resolves the course referenced by `course_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingServiceError::CourseNotFound`] when the course no
    /// longer exists, or [`MessagingServiceError::Directory`] when the
    /// lookup fails.
    pub async fn get_course<D>(&self, directory: &D) -> MessagingServiceResult<Course>
    where
        D: CourseDirectory + ?Sized,
    {
        let course_id = self.course_id();
        debug!(message_id = self.id().value(), course_id = course_id.value(), "resolving course");
        directory
            .find_course(course_id)
            .await?
            .ok_or(MessagingServiceError::CourseNotFound(course_id))
    }

    /// Resolves the authoring user referenced by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingServiceError::UserNotFound`] when the user no
    /// longer exists, or [`MessagingServiceError::Directory`] when the
    /// lookup fails.
    pub async fn get_user<D>(&self, directory: &D) -> MessagingServiceResult<User>
    where
        D: UserDirectory + ?Sized,
    {
        let user_id = self.user_id();
        debug!(message_id = self.id().value(), user_id = user_id.value(), "resolving author");
        directory
            .find_user(user_id)
            .await?
            .ok_or(MessagingServiceError::UserNotFound(user_id))
    }
}

impl MessageRecipient {
    /// Creates and persists a recipient from typed fields.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingServiceError::Record`] when validation or the
    /// insert fails.
    pub async fn create<S, C>(
        context: &RecordContext<S, C>,
        fields: NewMessageRecipient,
    ) -> MessagingServiceResult<Self>
    where
        S: RecordStore,
        C: Clock + Send + Sync,
    {
        Ok(context.create_new(fields.into()).await?)
    }

    /// Creates a recipient of `message`.
    ///
    /// `message_id` is taken from `message`, replacing any value in
    /// `fields`; everything else goes through normal validation.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingServiceError::Record`] when validation or the
    /// insert fails.
    pub async fn create_for_message<S, C>(
        context: &RecordContext<S, C>,
        message: &Message,
        fields: RecordFields,
    ) -> MessagingServiceResult<Self>
    where
        S: RecordStore,
        C: Clock + Send + Sync,
    {
        let mut merged = fields;
        merged.insert(MESSAGE_ID_FIELD.to_owned(), message.id().value().into());
        Ok(context.create_new(merged).await?)
    }

    /// Resolves the parent message referenced by `message_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingServiceError::MessageNotFound`] when the message
    /// row has been hard deleted, or [`MessagingServiceError::Record`] when
    /// the lookup fails.
    pub async fn get_message<S, C>(
        &self,
        context: &RecordContext<S, C>,
    ) -> MessagingServiceResult<Message>
    where
        S: RecordStore,
        C: Clock + Send + Sync,
    {
        let message_id = self.message_id();
        context
            .find_or_null(message_id)
            .await?
            .ok_or(MessagingServiceError::MessageNotFound(message_id))
    }
}
