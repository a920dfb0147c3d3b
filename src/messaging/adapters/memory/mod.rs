//! In-memory adapters for host-platform lookups.

mod directory;

pub use directory::InMemoryDirectory;
