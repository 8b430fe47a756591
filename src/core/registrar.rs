//! core::registrar
//!
//! Service layer over the catalog: one independently lockable [`Course`]
//! per catalog entry plus the directory of student records.
//!
//! # Concurrency
//!
//! Each course sits behind its own mutex. `enroll`, `drop` (including its
//! promotion step) and `add_to_waitlist` on one course are serialized;
//! operations on different courses never contend. The registrar is
//! `Send + Sync` and can be shared across threads by reference or `Arc`.
//!
//! Lock order: a course lock may be held while a student's registration
//! set is updated, never the other way around.
//!
//! # Registrations
//!
//! The registrar keeps each student's registration set in step with the
//! rosters: a seat gained (enroll or promotion) adds the course, a drop
//! removes it. Waitlist places are not registrations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::catalog::{CatalogError, CourseCatalog};
use super::config::{Config, CourseLimits};
use super::course::{Course, CourseState, DropOutcome, EnrollOutcome, SeatStatus};
use super::roster::StudentRow;
use super::student::{StudentRecord, StudentRef};
use super::types::{CourseId, GradeLevel, StudentId};

/// Errors from registrar lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrarError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Owned copy of one display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub grade_level: GradeLevel,
}

impl From<StudentRow<'_>> for StudentSummary {
    fn from(row: StudentRow<'_>) -> Self {
        Self {
            id: row.id.clone(),
            first_name: row.first_name.to_string(),
            last_name: row.last_name.to_string(),
            grade_level: row.grade_level,
        }
    }
}

/// Point-in-time view of a course, taken under its lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSnapshot {
    pub index: usize,
    pub id: CourseId,
    pub seats: SeatStatus,
    pub waitlist_capacity: usize,
    pub state: CourseState,
    pub roster: Vec<StudentSummary>,
    pub waitlist: Vec<StudentSummary>,
}

/// Courses for every catalog entry plus the student directory.
#[derive(Debug)]
pub struct Registrar {
    catalog: CourseCatalog,
    courses: Vec<Mutex<Course>>,
    students: RwLock<HashMap<StudentId, StudentRef>>,
}

impl Registrar {
    /// Build a registrar with limits resolved from configuration.
    pub fn new(catalog: CourseCatalog, config: &Config) -> Self {
        Self::build(catalog, |id| config.limits_for(id))
    }

    /// Build a registrar where every course has the same limits.
    pub fn with_limits(catalog: CourseCatalog, capacity: usize, waitlist_capacity: usize) -> Self {
        Self::build(catalog, |_| CourseLimits {
            capacity,
            waitlist_capacity,
        })
    }

    fn build(catalog: CourseCatalog, limits: impl Fn(&CourseId) -> CourseLimits) -> Self {
        let courses = catalog
            .iter()
            .map(|(_, id)| {
                let l = limits(id);
                Mutex::new(Course::new(id.clone(), l.capacity, l.waitlist_capacity))
            })
            .collect();
        Self {
            catalog,
            courses,
            students: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Number of courses (same as the catalog length).
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    // A Course operation runs to completion before returning, so a lock
    // poisoned by a panicking caller still guards a consistent course.
    fn course(&self, index: usize) -> Result<MutexGuard<'_, Course>, RegistrarError> {
        let slot = self.courses.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.courses.len(),
        })?;
        Ok(slot.lock().unwrap_or_else(PoisonError::into_inner))
    }

    // =========================================================================
    // Student directory
    // =========================================================================

    /// Add a student to the directory.
    ///
    /// Ids key the directory: if a record with this id already exists it is
    /// returned unchanged and `record` is discarded.
    pub fn register_student(&self, record: StudentRecord) -> StudentRef {
        let mut students = self
            .students
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            students
                .entry(record.id().clone())
                .or_insert_with(|| Arc::new(record)),
        )
    }

    /// Look up a student by id.
    pub fn student(&self, id: &StudentId) -> Option<StudentRef> {
        self.students
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// All known students, sorted by id.
    pub fn students(&self) -> Vec<StudentRef> {
        let mut all: Vec<_> = self
            .students
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    // =========================================================================
    // Course operations
    // =========================================================================

    /// Enroll a student in the course at `index`.
    pub fn enroll(&self, index: usize, student: &StudentRef) -> Result<EnrollOutcome, RegistrarError> {
        let mut course = self.course(index)?;
        let outcome = course.enroll(Arc::clone(student));
        if outcome == EnrollOutcome::Enrolled {
            student.register(course.id().clone());
        }
        info!(course = %course.id(), student = %student.id(), ?outcome, "admission decision");
        Ok(outcome)
    }

    /// Drop a student from the course at `index`, promoting from its
    /// waitlist if a seat opened.
    pub fn drop_student(&self, index: usize, id: &StudentId) -> Result<DropOutcome, RegistrarError> {
        let mut course = self.course(index)?;

        // Capture the records before the roster changes; Course::drop_student
        // removes the first match from the front and promotes the front.
        let leaving = course.roster().students().find(|s| s.id() == id).cloned();
        let next = course.waitlist().front().cloned();

        let outcome = course.drop_student(id);
        if let DropOutcome::Dropped { promoted } = &outcome {
            if let Some(student) = leaving {
                student.unregister(course.id());
            }
            if let (Some(_), Some(student)) = (promoted, next) {
                student.register(course.id().clone());
            }
        }
        info!(course = %course.id(), student = %id, ?outcome, "drop decision");
        Ok(outcome)
    }

    /// Bulk-seeding hook: append to the waitlist of the course at `index`
    /// without a capacity check.
    pub fn add_to_waitlist(&self, index: usize, student: &StudentRef) -> Result<(), RegistrarError> {
        self.course(index)?.add_to_waitlist(Arc::clone(student));
        Ok(())
    }

    /// Seats filled and capacity for the course at `index`.
    pub fn seat_status(&self, index: usize) -> Result<SeatStatus, RegistrarError> {
        Ok(self.course(index)?.seat_status())
    }

    /// Run `f` against the course at `index` while holding its lock.
    pub fn with_course<T>(
        &self,
        index: usize,
        f: impl FnOnce(&Course) -> T,
    ) -> Result<T, RegistrarError> {
        let course = self.course(index)?;
        Ok(f(&course))
    }

    /// Owned snapshot of the course at `index`.
    pub fn snapshot(&self, index: usize) -> Result<CourseSnapshot, RegistrarError> {
        self.with_course(index, |course| {
            let (roster, waitlist) = course.list_students();
            CourseSnapshot {
                index,
                id: course.id().clone(),
                seats: course.seat_status(),
                waitlist_capacity: course.waitlist_capacity(),
                state: course.state(),
                roster: roster.map(StudentSummary::from).collect(),
                waitlist: waitlist.map(StudentSummary::from).collect(),
            }
        })
    }

    /// Snapshots of every course, in catalog order.
    pub fn snapshots(&self) -> Vec<CourseSnapshot> {
        (0..self.courses.len())
            .filter_map(|index| self.snapshot(index).ok())
            .collect()
    }

    /// Seat status of every course, in catalog order.
    pub fn seat_report(&self) -> Vec<(CourseId, SeatStatus)> {
        self.courses
            .iter()
            .map(|slot| {
                let course = slot.lock().unwrap_or_else(PoisonError::into_inner);
                (course.id().clone(), course.seat_status())
            })
            .collect()
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new(CourseCatalog::standard(), &Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn registrar(capacity: usize, waitlist_capacity: usize) -> Registrar {
        Registrar::with_limits(CourseCatalog::standard(), capacity, waitlist_capacity)
    }

    fn add(reg: &Registrar, id: &str, last: &str) -> StudentRef {
        reg.register_student(StudentRecord::new(id, "First", last, GradeLevel::new(1)))
    }

    #[test]
    fn one_course_per_catalog_entry() {
        let reg = registrar(2, 1);
        assert_eq!(reg.course_count(), 20);
        assert_eq!(
            reg.seat_status(19).unwrap(),
            SeatStatus {
                filled: 0,
                capacity: 2
            }
        );
    }

    #[test]
    fn unknown_course_is_an_error() {
        let reg = registrar(2, 1);
        let s = add(&reg, "1", "Adams");
        assert_eq!(
            reg.enroll(20, &s),
            Err(RegistrarError::Catalog(CatalogError::IndexOutOfRange {
                index: 20,
                len: 20
            }))
        );
        assert!(reg.drop_student(99, s.id()).is_err());
        assert!(reg.snapshot(20).is_err());
    }

    #[test]
    fn register_student_dedupes_by_id() {
        let reg = registrar(2, 1);
        let first = add(&reg, "1", "Adams");
        let second = add(&reg, "1", "Other");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.last_name(), "Adams");
        assert_eq!(reg.students().len(), 1);
        assert!(reg.student(&StudentId::new("1")).is_some());
        assert!(reg.student(&StudentId::new("2")).is_none());
    }

    #[test]
    fn enroll_records_registration_only_for_seats() {
        let reg = registrar(1, 1);
        let a = add(&reg, "a", "Adams");
        let b = add(&reg, "b", "Baker");
        let math = CourseId::new("MATH 101");

        assert_eq!(reg.enroll(0, &a).unwrap(), EnrollOutcome::Enrolled);
        assert_eq!(reg.enroll(0, &b).unwrap(), EnrollOutcome::Waitlisted);

        assert!(a.is_registered(&math));
        assert!(!b.is_registered(&math));
    }

    #[test]
    fn drop_moves_registration_to_promoted_student() {
        let reg = registrar(1, 1);
        let a = add(&reg, "a", "Adams");
        let b = add(&reg, "b", "Baker");
        let math = CourseId::new("MATH 101");
        reg.enroll(0, &a).unwrap();
        reg.enroll(0, &b).unwrap();

        let outcome = reg.drop_student(0, a.id()).unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Dropped {
                promoted: Some(StudentId::new("b"))
            }
        );
        assert!(!a.is_registered(&math));
        assert!(b.is_registered(&math));
    }

    #[test]
    fn drop_not_enrolled_leaves_registrations() {
        let reg = registrar(1, 1);
        let a = add(&reg, "a", "Adams");
        reg.enroll(0, &a).unwrap();

        assert_eq!(reg.drop_student(1, a.id()).unwrap(), DropOutcome::NotEnrolled);
        assert!(a.is_registered(&CourseId::new("MATH 101")));
    }

    #[test]
    fn student_can_hold_several_courses() {
        let reg = registrar(2, 0);
        let a = add(&reg, "a", "Adams");
        reg.enroll(0, &a).unwrap();
        reg.enroll(4, &a).unwrap();
        reg.enroll(19, &a).unwrap();

        let held: Vec<_> = a
            .registered_courses()
            .into_iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(held, vec!["BIO 401", "CS 101", "MATH 101"]);
    }

    #[test]
    fn snapshot_copies_rows() {
        let reg = registrar(1, 2);
        let a = add(&reg, "a", "Adams");
        let b = add(&reg, "b", "Baker");
        reg.enroll(3, &a).unwrap();
        reg.enroll(3, &b).unwrap();

        let snap = reg.snapshot(3).unwrap();
        assert_eq!(snap.id.as_str(), "MATH 401");
        assert_eq!(snap.seats.filled, 1);
        assert_eq!(snap.state, CourseState::WaitlistOpen);
        assert_eq!(snap.roster[0].last_name, "Adams");
        assert_eq!(snap.waitlist[0].id.as_str(), "b");
    }

    #[test]
    fn config_limits_apply_per_course() {
        let config = Config::default().with_default_limits(Some(5), Some(1)).unwrap();
        let reg = Registrar::new(CourseCatalog::standard(), &config);
        assert_eq!(reg.seat_status(0).unwrap().capacity, 5);
        assert_eq!(
            reg.with_course(0, |c| c.waitlist_capacity()).unwrap(),
            1
        );
    }

    #[test]
    fn parallel_courses_are_independent() {
        let reg = registrar(3, 2);

        thread::scope(|scope| {
            for index in 0..reg.course_count() {
                let reg = &reg;
                scope.spawn(move || {
                    for n in 0..10 {
                        let s = add(reg, &format!("{index}-{n}"), &format!("L{n}"));
                        reg.enroll(index, &s).unwrap();
                    }
                });
            }
        });

        for snap in reg.snapshots() {
            assert_eq!(snap.roster.len(), 3);
            assert_eq!(snap.waitlist.len(), 2);
        }
    }

    #[test]
    fn contended_course_keeps_capacity_invariant() {
        let reg = registrar(4, 3);

        thread::scope(|scope| {
            for t in 0..8 {
                let reg = &reg;
                scope.spawn(move || {
                    for n in 0..25 {
                        let s = add(reg, &format!("{t}-{n}"), &format!("L{}", n % 5));
                        reg.enroll(0, &s).unwrap();
                        if n % 3 == 0 {
                            reg.drop_student(0, s.id()).unwrap();
                        }
                    }
                });
            }
        });

        let snap = reg.snapshot(0).unwrap();
        assert!(snap.roster.len() <= 4);
        assert!(snap.waitlist.len() <= 3);
        assert_eq!(snap.seats.filled, snap.roster.len());

        let enrolled: usize = reg
            .students()
            .iter()
            .filter(|s| s.is_registered(&CourseId::new("MATH 101")))
            .count();
        assert_eq!(enrolled, snap.roster.len());
    }
}
