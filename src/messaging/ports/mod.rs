//! Port contracts for host-platform lookups.
//!
//! Courses and users are owned by the host platform; messaging only ever
//! resolves them by id.

pub mod directory;

pub use directory::{CourseDirectory, DirectoryError, DirectoryResult, UserDirectory};
