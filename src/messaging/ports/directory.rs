//! Course and user lookup ports.

use crate::messaging::domain::{Course, CourseId, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Course lookup by id.
#[async_trait]
pub trait CourseDirectory: Send + Sync {
    /// Finds a course by id.
    ///
    /// Returns `None` when the course does not exist.
    async fn find_course(&self, id: CourseId) -> DirectoryResult<Option<Course>>;
}

/// User lookup by id.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by id.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_user(&self, id: UserId) -> DirectoryResult<Option<User>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The lookup backend failed.
    #[error("directory lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a lookup backend failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
