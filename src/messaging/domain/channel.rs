//! Delivery channel of a message.

use super::ParseOutputChannelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel a message is delivered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputChannel {
    /// Delivered as email.
    Email,
    /// Delivered through the platform's internal messaging.
    Message,
}

impl OutputChannel {
    /// Canonical storage values of every channel.
    pub const VALUES: &'static [&'static str] = &["email", "message"];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for OutputChannel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OutputChannel {
    type Error = ParseOutputChannelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(ParseOutputChannelError(value.to_owned())),
        }
    }
}
