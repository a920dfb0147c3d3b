//! Shared test helpers for in-memory integration tests.

use std::{io, sync::Arc};

use mockable::DefaultClock;
use quickmail::{
    messaging::{
        adapters::memory::InMemoryDirectory,
        domain::{CourseId, Message, NewMessage, OutputChannel, UserId},
        services::MessagingServiceError,
    },
    persistent::{
        adapters::memory::InMemoryRecordStore,
        domain::{FieldValue, RecordFields},
        services::RecordContext,
    },
};
use rstest::fixture;
use tokio::runtime::Runtime;

/// Record context backed by the in-memory store and the system clock.
pub type TestContext = RecordContext<InMemoryRecordStore, DefaultClock>;

/// Boxed error used by test bodies.
pub type TestError = Box<dyn std::error::Error + Send + Sync>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh record context for each test.
#[fixture]
pub fn context() -> TestContext {
    RecordContext::new(
        Arc::new(InMemoryRecordStore::with_tables([
            "messages",
            "message_recipients",
        ])),
        Arc::new(DefaultClock),
    )
}

/// Provides an empty course and user directory.
#[fixture]
pub fn directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
}

/// Generic field set for an email message from `course_id` and `user_id`.
#[must_use]
pub fn email_fields(course_id: i64, user_id: i64) -> RecordFields {
    RecordFields::from([
        ("course_id".to_owned(), FieldValue::Integer(course_id)),
        ("user_id".to_owned(), FieldValue::Integer(user_id)),
        ("output_channel".to_owned(), FieldValue::from("email")),
    ])
}

/// Creates an email message for course 1 by user 1.
///
/// # Errors
///
/// Returns an error if validation or the insert fails.
pub fn create_message(rt: &Runtime, context: &TestContext) -> Result<Message, MessagingServiceError> {
    rt.block_on(Message::create(
        context,
        NewMessage::new(CourseId::new(1), UserId::new(1), OutputChannel::Email),
    ))
}
