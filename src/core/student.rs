//! core::student
//!
//! Student records shared between the registrar and course containers.
//!
//! # Ownership
//!
//! A [`StudentRecord`] is allocated once by whoever registers the student
//! and handed around as a [`StudentRef`]. Rosters and waitlists hold clones
//! of that reference; removing a student from a course never drops the
//! record itself.
//!
//! Identity fields are immutable. The set of course registrations changes
//! over the record's lifetime and sits behind a mutex so any holder of a
//! shared reference can update it.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::types::{CourseId, GradeLevel, StudentId};

/// Shared handle to a student record.
pub type StudentRef = Arc<StudentRecord>;

/// A student's identity plus the courses they currently hold a seat in.
#[derive(Debug)]
pub struct StudentRecord {
    id: StudentId,
    first_name: String,
    last_name: String,
    grade_level: GradeLevel,
    registered: Mutex<BTreeSet<CourseId>>,
}

impl StudentRecord {
    /// Create a record with no registrations.
    pub fn new(
        id: impl Into<StudentId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        grade_level: GradeLevel,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            grade_level,
            registered: Mutex::new(BTreeSet::new()),
        }
    }

    /// Create a record and wrap it in a shared reference.
    pub fn shared(
        id: impl Into<StudentId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        grade_level: GradeLevel,
    ) -> StudentRef {
        Arc::new(Self::new(id, first_name, last_name, grade_level))
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn grade_level(&self) -> GradeLevel {
        self.grade_level
    }

    /// Record a registration. Returns `false` if it was already present.
    pub fn register(&self, course: CourseId) -> bool {
        self.registrations().insert(course)
    }

    /// Remove a registration. Returns `false` if it was not present.
    pub fn unregister(&self, course: &CourseId) -> bool {
        self.registrations().remove(course)
    }

    /// Check whether the student holds a registration for `course`.
    pub fn is_registered(&self, course: &CourseId) -> bool {
        self.registrations().contains(course)
    }

    /// Snapshot of current registrations, sorted by course id.
    pub fn registered_courses(&self) -> Vec<CourseId> {
        self.registrations().iter().cloned().collect()
    }

    // A set insert/remove cannot leave the set half-updated, so a poisoned
    // lock still guards consistent data.
    fn registrations(&self) -> MutexGuard<'_, BTreeSet<CourseId>> {
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
