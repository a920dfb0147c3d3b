//! Error types for messaging domain parsing.

use thiserror::Error;

/// Error returned while parsing an output channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown output channel: {0}")]
pub struct ParseOutputChannelError(pub String);
