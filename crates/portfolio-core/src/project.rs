//! The Project record and its identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a project record.
///
/// Ids are assigned by the record store, start at 1, and are never reused.
/// Id 0 is reserved: the read surface treats it as "no id given".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Creates a project ID from a raw integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_core::ProjectId;
    ///
    /// let id = ProjectId::new(7);
    /// assert_eq!(id.as_u64(), 7);
    /// ```
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner integer value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The first id a fresh store hands out.
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the id following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ProjectId> for u64 {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ProjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A single project record as the store persists it.
///
/// `title` is supplied at creation time; `description` and `founded` start
/// at their defaults and change only through the write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier, immutable once created.
    pub id: ProjectId,

    /// Project title, required at creation.
    pub title: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Founding year.
    #[serde(default)]
    pub founded: i64,
}

impl Project {
    /// Creates a new record with empty/zero field defaults.
    pub fn new<S: Into<String>>(id: ProjectId, title: S) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            founded: 0,
        }
    }
}
