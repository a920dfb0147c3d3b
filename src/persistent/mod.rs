//! Generic persistence capability shared by every stored record type.
//!
//! A record type declares an [`domain::EntitySchema`] (table, field set and
//! soft-delete support) and implements [`domain::PersistentRecord`]. The
//! create, lookup and delete operations live on
//! [`services::RecordContext`], which is handed an explicit store and clock
//! instead of reaching for ambient state. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
