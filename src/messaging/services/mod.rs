//! Application services for messages and recipients.
//!
//! Adds typed constructors and relation lookups to the domain records.

mod relations;

pub use relations::{MessagingServiceError, MessagingServiceResult};
