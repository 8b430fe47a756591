//! core::catalog
//!
//! The fixed course catalog: 20 course names, five subjects at four levels,
//! addressed by index 0..=19.
//!
//! The admission core only ever sees the resulting [`CourseId`] labels; it
//! never parses them.

use thiserror::Error;

use super::types::CourseId;

/// The standard catalog, in index order.
#[rustfmt::skip]
pub const COURSE_NAMES: [&str; 20] = [
    "MATH 101", "MATH 201", "MATH 301", "MATH 401",
    "CS 101", "CS 201", "CS 301", "CS 401",
    "ENG 101", "ENG 201", "ENG 301", "ENG 401",
    "HIST 101", "HIST 201", "HIST 301", "HIST 401",
    "BIO 101", "BIO 201", "BIO 301", "BIO 401",
];

/// Errors from catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("course index {index} out of range (catalog has {len} courses)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown course '{0}'")]
    UnknownCourse(String),
}

/// An ordered list of course ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCatalog {
    courses: Vec<CourseId>,
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl CourseCatalog {
    /// The standard 20-course catalog.
    pub fn standard() -> Self {
        Self::from_names(COURSE_NAMES)
    }

    /// Build a catalog from arbitrary labels, in order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            courses: names.into_iter().map(CourseId::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Course id at `index`.
    pub fn name(&self, index: usize) -> Result<&CourseId, CatalogError> {
        self.courses
            .get(index)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.courses.len(),
            })
    }

    /// Index of the course with exactly this label.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.as_str() == name)
    }

    /// Resolve user input that is either an index or a label.
    ///
    /// Labels match case-insensitively, so `cs 101` finds `CS 101`.
    pub fn resolve(&self, input: &str) -> Result<usize, CatalogError> {
        let input = input.trim();
        if let Ok(index) = input.parse::<usize>() {
            return self.name(index).map(|_| index);
        }
        self.courses
            .iter()
            .position(|c| c.as_str().eq_ignore_ascii_case(input))
            .ok_or_else(|| CatalogError::UnknownCourse(input.to_string()))
    }

    /// `(index, id)` pairs in catalog order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &CourseId)> + '_ {
        self.courses.iter().enumerate()
    }
}
