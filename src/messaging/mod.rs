//! Outbound messages and their recipients.
//!
//! A [`domain::Message`] is authored by a user within a course and sent over
//! an output channel; each [`domain::MessageRecipient`] attaches a user to a
//! message. Both are persistent records built on
//! [`crate::persistent`]. Course and user data belong to the host platform
//! and are reached through the directory ports. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
