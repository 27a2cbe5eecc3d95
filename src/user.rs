use std::fmt;

use serde::Serialize;

use crate::error::{LibraryError, Result};

/// Library patron category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    /// Selector 1
    Student,
    /// Selector 2
    Faculty,
}

impl Role {
    /// Map a menu selector to a role
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidArgument` for anything other than 1 or 2.
    pub fn from_selector(selector: i64) -> Result<Self> {
        match selector {
            1 => Ok(Self::Student),
            2 => Ok(Self::Faculty),
            other => Err(LibraryError::InvalidArgument(other)),
        }
    }

    /// Label shown in user listings
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
        }
    }
}

/// Process-unique user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered library user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Assigned by the factory, never reused
    id: UserId,
    /// Name as entered
    name: String,
    /// Student or faculty
    role: Role,
}

impl User {
    /// Only the factory hands out ids, so construction stays crate-private
    pub(crate) fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self { id, name: name.into(), role }
    }

    /// Get the user's id
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Get the user's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the user's role
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Name: {}, UserID: {}", self.role.label(), self.name, self.id)
    }
}
