//! Port contracts for record persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by
//! [`crate::persistent::services::RecordContext`].

pub mod store;

pub use store::{RecordStore, RecordStoreError, RecordStoreResult};
