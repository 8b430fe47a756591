//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StudentId`] - Caller-supplied student identifier
//! - [`CourseId`] - Opaque course label taken from the catalog
//! - [`GradeLevel`] - Stored grade level (1: Freshman .. 4: Senior)
//!
//! # Validation
//!
//! The admission core performs no format validation on these values: ids
//! and labels are compared byte-for-byte and grade levels are stored as
//! given. Text entered at the CLI goes through [`std::str::FromStr`], which
//! rejects input that cannot be represented at all (blank ids, non-numeric
//! grades).
//!
//! # Examples
//!
//! ```
//! use registrar::core::types::{GradeLevel, StudentId};
//!
//! let id = StudentId::new("1042");
//! assert_eq!(id.as_str(), "1042");
//!
//! let grade: GradeLevel = "3".parse().unwrap();
//! assert_eq!(grade.label(), Some("Junior"));
//!
//! assert!("".parse::<StudentId>().is_err());
//! assert!("senior".parse::<GradeLevel>().is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing user-entered values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("student id cannot be empty")]
    EmptyStudentId,

    #[error("invalid grade level: {0}")]
    InvalidGradeLevel(String),

    #[error("course id cannot be empty")]
    EmptyCourseId,
}

/// A student identifier.
///
/// Ids are supplied by the caller and never checked for format. Two records
/// with the same id are treated as the same student by
/// [`Roster::remove`](crate::core::roster::Roster::remove).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Create a student id without any validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StudentId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TypeError::EmptyStudentId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course identifier.
///
/// This is the display name handed out by the
/// [`CourseCatalog`](crate::core::catalog::CourseCatalog). The core never
/// parses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Create a course id from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CourseId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TypeError::EmptyCourseId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student's grade level.
///
/// Levels 1 through 4 have names; any other value is stored and displayed
/// as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeLevel(i32);

impl GradeLevel {
    /// Level names, indexed by `level - 1`.
    const LABELS: [&'static str; 4] = ["Freshman", "Sophomore", "Junior", "Senior"];

    /// Store a grade level as given.
    pub fn new(level: i32) -> Self {
        Self(level)
    }

    /// The raw level.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Name of the level, if it is one of the four known levels.
    pub fn label(&self) -> Option<&'static str> {
        let idx = usize::try_from(self.0).ok()?.checked_sub(1)?;
        Self::LABELS.get(idx).copied()
    }
}

impl FromStr for GradeLevel {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| TypeError::InvalidGradeLevel(s.trim().to_string()))
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
