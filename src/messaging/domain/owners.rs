//! Host-platform entities that own messages.
//!
//! Both convert into their id type so ownership checks accept either the
//! entity or a bare id.

use super::{CourseId, UserId};
use serde::{Deserialize, Serialize};

/// A course as exposed by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    fullname: String,
    shortname: String,
}

impl Course {
    /// Creates a course value.
    #[must_use]
    pub fn new(id: CourseId, fullname: impl Into<String>, shortname: impl Into<String>) -> Self {
        Self {
            id,
            fullname: fullname.into(),
            shortname: shortname.into(),
        }
    }

    /// Returns the course id.
    #[must_use]
    pub const fn id(&self) -> CourseId {
        self.id
    }

    /// Returns the full course name.
    #[must_use]
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Returns the short course name.
    #[must_use]
    pub fn shortname(&self) -> &str {
        &self.shortname
    }
}

impl From<&Course> for CourseId {
    fn from(course: &Course) -> Self {
        course.id
    }
}

impl From<Course> for CourseId {
    fn from(course: Course) -> Self {
        course.id
    }
}

/// A user as exposed by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
}

impl User {
    /// Creates a user value.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Returns the user id.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<&User> for UserId {
    fn from(user: &User) -> Self {
        user.id
    }
}

impl From<User> for UserId {
    fn from(user: User) -> Self {
        user.id
    }
}
