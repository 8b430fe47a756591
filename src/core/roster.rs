//! core::roster
//!
//! Last-name ordered container of enrolled students for one course.
//!
//! # Invariants
//!
//! - Entries are sorted ascending by last name (byte-wise comparison)
//! - Id uniqueness is NOT enforced here; callers that care must check
//!
//! # Tie-break
//!
//! [`Roster::insert`] places a new entry immediately before the first
//! existing entry whose last name is not strictly less than its own. Among
//! entries with equal last names, the most recently inserted one therefore
//! comes first. Display order depends on this, so it is fixed behavior.
//!
//! # Example
//!
//! ```
//! use registrar::core::roster::Roster;
//! use registrar::core::student::StudentRecord;
//! use registrar::core::types::GradeLevel;
//!
//! let mut roster = Roster::new();
//! roster.insert(StudentRecord::shared("1", "Ann", "Lee", GradeLevel::new(1)));
//! roster.insert(StudentRecord::shared("2", "Bo", "Kim", GradeLevel::new(2)));
//! roster.insert(StudentRecord::shared("3", "Cy", "Lee", GradeLevel::new(3)));
//!
//! let ids: Vec<_> = roster.display().map(|row| row.id.as_str()).collect();
//! assert_eq!(ids, vec!["2", "3", "1"]);
//! ```

use serde::Serialize;

use super::student::StudentRef;
use super::types::{GradeLevel, StudentId};

/// One display row: the fields a renderer needs, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub id: &'a StudentId,
    pub grade_level: GradeLevel,
}

impl<'a> StudentRow<'a> {
    pub(crate) fn of(student: &'a StudentRef) -> Self {
        Self {
            first_name: student.first_name(),
            last_name: student.last_name(),
            id: student.id(),
            grade_level: student.grade_level(),
        }
    }
}

/// Enrolled students for a single course, ordered by last name.
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<StudentRef>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student, keeping last-name order.
    ///
    /// See the module docs for the tie-break on equal last names.
    pub fn insert(&mut self, student: StudentRef) {
        // Entries are sorted, so the first "not less than" position is a
        // partition point.
        let pos = self
            .entries
            .partition_point(|e| e.last_name() < student.last_name());
        self.entries.insert(pos, student);
    }

    /// Remove the first entry (from the front) whose id matches.
    ///
    /// Returns `false` when no entry matches; that is an ordinary outcome.
    pub fn remove(&mut self, id: &StudentId) -> bool {
        match self.entries.iter().position(|e| e.id() == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of enrolled students.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether any entry has the given id.
    pub fn contains(&self, id: &StudentId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    /// Display rows in roster order.
    pub fn display(&self) -> impl ExactSizeIterator<Item = StudentRow<'_>> + '_ {
        self.entries.iter().map(StudentRow::of)
    }

    /// The shared records in roster order.
    pub fn students(&self) -> impl ExactSizeIterator<Item = &StudentRef> + '_ {
        self.entries.iter()
    }
}
