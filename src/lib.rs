//! Quickmail: persistent records for course messaging.
//!
//! This crate provides a small persistence layer for outbound course
//! messages and their recipients, built on a reusable record capability.
//!
//! # Architecture
//!
//! Quickmail follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record schemas, field values and ownership rules
//! - **Ports**: Abstract trait interfaces for row storage and host lookups
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`persistent`]: Generic create, lookup, soft delete and hard delete
//! - [`messaging`]: Messages, recipients and their course/user owners

pub mod messaging;
pub mod persistent;
