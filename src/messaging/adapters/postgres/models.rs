//! Diesel row models for message persistence.

use super::schema::{message_recipients, messages};
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Store-assigned message identifier.
    pub id: i64,
    /// Owning course identifier.
    pub course_id: i64,
    /// Authoring user identifier.
    pub user_id: i64,
    /// Delivery channel.
    pub output_channel: String,
    /// Creation time in epoch seconds.
    pub timecreated: i64,
    /// Soft-delete time in epoch seconds.
    pub timedeleted: i64,
}

/// Insert and update model for message records.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset)]
#[diesel(table_name = messages)]
pub struct MessageColumns {
    /// Owning course identifier.
    pub course_id: i64,
    /// Authoring user identifier.
    pub user_id: i64,
    /// Delivery channel.
    pub output_channel: String,
    /// Creation time in epoch seconds.
    pub timecreated: i64,
    /// Soft-delete time in epoch seconds.
    pub timedeleted: i64,
}

/// Query result row for recipient records.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = message_recipients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRecipientRow {
    /// Store-assigned recipient identifier.
    pub id: i64,
    /// Parent message identifier.
    pub message_id: i64,
    /// Receiving user identifier.
    pub user_id: i64,
    /// Creation time in epoch seconds.
    pub timecreated: i64,
}

/// Insert and update model for recipient records.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset)]
#[diesel(table_name = message_recipients)]
pub struct MessageRecipientColumns {
    /// Parent message identifier.
    pub message_id: i64,
    /// Receiving user identifier.
    pub user_id: i64,
    /// Creation time in epoch seconds.
    pub timecreated: i64,
}
