//! Domain model for messages, recipients and their owners.

mod channel;
mod error;
mod ids;
mod message;
mod owners;
mod recipient;

pub use channel::OutputChannel;
pub use error::ParseOutputChannelError;
pub use ids::{CourseId, UserId};
pub use message::{MESSAGE_SCHEMA, Message, NewMessage};
pub use owners::{Course, User};
pub use recipient::{MESSAGE_RECIPIENT_SCHEMA, MessageRecipient, NewMessageRecipient};
pub(crate) use recipient::MESSAGE_ID_FIELD;
