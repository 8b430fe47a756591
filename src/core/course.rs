//! core::course
//!
//! The per-course admission-control state machine.
//!
//! # Architecture
//!
//! A [`Course`] exclusively owns one [`Roster`] and one [`Waitlist`] and
//! moves students between them:
//!
//! ```text
//!            enroll                    drop(id)
//!   ┌──────────────────────┐    ┌──────────────────────────┐
//!   │ seat free  -> Roster │    │ Roster.remove(id)        │
//!   │ wl free    -> Wait.  │    │   ok  -> promote 1 front │
//!   │ otherwise  -> reject │    │   err -> NotEnrolled     │
//!   └──────────────────────┘    └──────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! - `roster.count() <= capacity`
//! - `waitlist.size() <= waitlist_capacity`, except through
//!   [`Course::add_to_waitlist`]
//! - A successful drop promotes at most one waitlisted student
//! - Every operation is total: full, rejected, and not-found are outcomes
//!
//! # Example
//!
//! ```
//! use registrar::core::course::{Course, DropOutcome, EnrollOutcome};
//! use registrar::core::student::StudentRecord;
//! use registrar::core::types::{CourseId, GradeLevel, StudentId};
//!
//! let mut course = Course::new(CourseId::new("MATH 101"), 1, 1);
//! let a = StudentRecord::shared("a", "Ann", "Lee", GradeLevel::new(1));
//! let b = StudentRecord::shared("b", "Bo", "Kim", GradeLevel::new(2));
//!
//! assert_eq!(course.enroll(a), EnrollOutcome::Enrolled);
//! assert_eq!(course.enroll(b), EnrollOutcome::Waitlisted);
//!
//! let outcome = course.drop_student(&StudentId::new("a"));
//! assert_eq!(outcome, DropOutcome::Dropped { promoted: Some(StudentId::new("b")) });
//! assert_eq!(course.seat_status().filled, 1);
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::roster::{Roster, StudentRow};
use super::student::StudentRef;
use super::types::{CourseId, StudentId};
use super::waitlist::Waitlist;

/// Result of [`Course::enroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollOutcome {
    /// A seat was free; the student is on the roster.
    Enrolled,
    /// The roster was full; the student is at the back of the waitlist.
    Waitlisted,
    /// Roster and waitlist were both full. Nothing changed.
    Rejected,
}

/// Result of [`Course::drop_student`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropOutcome {
    /// The student left the roster. If the waitlist was non-empty, its
    /// front student took the seat.
    Dropped { promoted: Option<StudentId> },
    /// No roster entry had that id. Nothing changed.
    NotEnrolled,
}

/// Derived admission state. Never stored; computed from counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseState {
    /// The roster has free seats.
    OpenSeats,
    /// The roster is full but the waitlist is accepting students.
    WaitlistOpen,
    /// Both the roster and the waitlist are full.
    Full,
}

/// Seats filled versus roster capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatStatus {
    pub filled: usize,
    pub capacity: usize,
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.filled, self.capacity)
    }
}

/// A capacity-bounded course with an overflow waitlist.
#[derive(Debug)]
pub struct Course {
    id: CourseId,
    capacity: usize,
    waitlist_capacity: usize,
    roster: Roster,
    waitlist: Waitlist,
}

impl Course {
    /// Create an empty course.
    pub fn new(id: CourseId, capacity: usize, waitlist_capacity: usize) -> Self {
        Self {
            id,
            capacity,
            waitlist_capacity,
            roster: Roster::new(),
            waitlist: Waitlist::new(),
        }
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn waitlist_capacity(&self) -> usize {
        self.waitlist_capacity
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn waitlist(&self) -> &Waitlist {
        &self.waitlist
    }

    /// Admit a student: roster if a seat is free, else waitlist if it has
    /// room, else reject.
    pub fn enroll(&mut self, student: StudentRef) -> EnrollOutcome {
        let outcome = if self.roster.count() < self.capacity {
            self.roster.insert(Arc::clone(&student));
            EnrollOutcome::Enrolled
        } else if self.waitlist.size() < self.waitlist_capacity {
            self.waitlist.enqueue(Arc::clone(&student));
            EnrollOutcome::Waitlisted
        } else {
            EnrollOutcome::Rejected
        };

        debug!(
            course = %self.id,
            student = %student.id(),
            ?outcome,
            filled = self.roster.count(),
            waiting = self.waitlist.size(),
            "enroll"
        );
        outcome
    }

    /// Remove a student from the roster and promote the waitlist front into
    /// the freed seat.
    ///
    /// Exactly one promotion happens per successful drop, never more.
    pub fn drop_student(&mut self, id: &StudentId) -> DropOutcome {
        if !self.roster.remove(id) {
            debug!(course = %self.id, student = %id, "drop: not enrolled");
            return DropOutcome::NotEnrolled;
        }

        let promoted = self.promote_front();
        debug!(
            course = %self.id,
            student = %id,
            promoted = ?promoted.as_ref().map(StudentId::as_str),
            filled = self.roster.count(),
            waiting = self.waitlist.size(),
            "drop"
        );
        DropOutcome::Dropped { promoted }
    }

    // Called right after a roster removal, so the enroll below always takes
    // the roster branch.
    fn promote_front(&mut self) -> Option<StudentId> {
        let next = Arc::clone(self.waitlist.front()?);
        let outcome = self.enroll(Arc::clone(&next));
        if outcome != EnrollOutcome::Enrolled {
            warn!(course = %self.id, student = %next.id(), ?outcome, "promotion did not seat student");
        }
        self.waitlist.dequeue();
        Some(next.id().clone())
    }

    /// Append a student to the waitlist without any capacity check.
    ///
    /// This is the bulk-seeding hook. It can push the waitlist past
    /// `waitlist_capacity`; interactive admission must go through
    /// [`Course::enroll`].
    pub fn add_to_waitlist(&mut self, student: StudentRef) {
        debug!(course = %self.id, student = %student.id(), "seeded onto waitlist");
        self.waitlist.enqueue(student);
    }

    /// Seats filled and roster capacity.
    pub fn seat_status(&self) -> SeatStatus {
        SeatStatus {
            filled: self.roster.count(),
            capacity: self.capacity,
        }
    }

    /// Current admission state derived from the counts.
    pub fn state(&self) -> CourseState {
        if self.roster.count() < self.capacity {
            CourseState::OpenSeats
        } else if self.waitlist.size() < self.waitlist_capacity {
            CourseState::WaitlistOpen
        } else {
            CourseState::Full
        }
    }

    /// Roster rows followed by waitlist rows.
    #[allow(clippy::type_complexity)]
    pub fn list_students(
        &self,
    ) -> (
        impl ExactSizeIterator<Item = StudentRow<'_>> + '_,
        impl ExactSizeIterator<Item = StudentRow<'_>> + '_,
    ) {
        (self.roster.display(), self.waitlist.display())
    }
}
