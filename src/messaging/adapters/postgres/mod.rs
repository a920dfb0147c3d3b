//! `PostgreSQL` adapters for message and recipient persistence.

mod config;
mod mapping;
mod models;
mod schema;
mod store;

pub use config::{PostgresConfigError, PostgresStoreConfig};
pub use store::{MessagingPgPool, PostgresMessagingStore};
