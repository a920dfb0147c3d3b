//! Shared world state for persistent record BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use quickmail::{
    messaging::domain::{Message, MessageRecipient},
    persistent::{
        adapters::memory::InMemoryRecordStore,
        domain::RecordId,
        services::{RecordContext, RecordContextResult},
    },
};
use rstest::fixture;

/// Record context type used by the BDD world.
pub type TestContext = RecordContext<InMemoryRecordStore, DefaultClock>;

/// Scenario world for persistent record behaviour tests.
pub struct RecordWorld {
    /// The record context under test.
    pub context: TestContext,
    /// Messages created so far, in creation order.
    pub messages: Vec<Message>,
    /// Ids of messages passed to a delete step, in creation order.
    pub message_ids: Vec<RecordId>,
    /// Recipient created by the scenario.
    pub recipient: Option<MessageRecipient>,
    /// Result of the last soft delete attempt.
    pub last_soft_delete: Option<RecordContextResult<()>>,
}

impl RecordWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let context = RecordContext::new(
            Arc::new(InMemoryRecordStore::with_tables([
                "messages",
                "message_recipients",
            ])),
            Arc::new(DefaultClock),
        );
        Self {
            context,
            messages: Vec::new(),
            message_ids: Vec::new(),
            recipient: None,
            last_soft_delete: None,
        }
    }

    /// Returns the message at `position`, counting from one.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer messages were created.
    pub fn message_at(&self, position: usize) -> Result<&Message, eyre::Report> {
        position
            .checked_sub(1)
            .and_then(|index| self.messages.get(index))
            .ok_or_else(|| eyre::eyre!("no message at position {position} in scenario world"))
    }
}

impl Default for RecordWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RecordWorld {
    RecordWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
