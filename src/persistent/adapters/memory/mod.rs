//! In-memory adapters for record persistence.

mod store;

pub use store::InMemoryRecordStore;
