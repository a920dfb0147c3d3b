//! In-memory course and user directory.
//!
//! Doubles as a data generator: [`InMemoryDirectory::create_course`] and
//! [`InMemoryDirectory::create_user`] assign sequential ids starting at 1.

use crate::messaging::{
    domain::{Course, CourseId, User, UserId},
    ports::{CourseDirectory, DirectoryError, DirectoryResult, UserDirectory},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory directory of courses and users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    courses: HashMap<CourseId, Course>,
    users: HashMap<UserId, User>,
    last_course_id: i64,
    last_user_id: i64,
}

fn lock_error(err: impl std::fmt::Display) -> DirectoryError {
    DirectoryError::lookup(std::io::Error::other(err.to_string()))
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and stores a course with the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Lookup`] if the internal lock is poisoned.
    pub fn create_course(&self, fullname: &str) -> DirectoryResult<Course> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_course_id += 1;
        let id = CourseId::new(state.last_course_id);
        let course = Course::new(id, fullname, format!("course{id}"));
        state.courses.insert(id, course.clone());
        Ok(course)
    }

    /// Generates and stores a user with the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Lookup`] if the internal lock is poisoned.
    pub fn create_user(&self, username: &str) -> DirectoryResult<User> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_user_id += 1;
        let id = UserId::new(state.last_user_id);
        let user = User::new(id, username, format!("{username}@example.com"));
        state.users.insert(id, user.clone());
        Ok(user)
    }

    /// Removes a course, as when the host platform deletes it.
    ///
    /// Returns `false` when no course had the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Lookup`] if the internal lock is poisoned.
    pub fn remove_course(&self, id: CourseId) -> DirectoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.courses.remove(&id).is_some())
    }

    /// Removes a user, as when the host platform deletes them.
    ///
    /// Returns `false` when no user had the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Lookup`] if the internal lock is poisoned.
    pub fn remove_user(&self, id: UserId) -> DirectoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.users.remove(&id).is_some())
    }
}

#[async_trait]
impl CourseDirectory for InMemoryDirectory {
    async fn find_course(&self, id: CourseId) -> DirectoryResult<Option<Course>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.courses.get(&id).cloned())
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_user(&self, id: UserId) -> DirectoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }
}
