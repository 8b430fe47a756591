//! Integration tests for the registrar service layer.
//!
//! These tests drive the public API the way the CLI does: configuration
//! from files, a registrar over the standard catalog, and the random fill.

use std::fs;

use tempfile::TempDir;

use registrar::core::catalog::CourseCatalog;
use registrar::core::config::{Config, CourseLimits};
use registrar::core::course::{CourseState, DropOutcome, EnrollOutcome, SeatStatus};
use registrar::core::registrar::Registrar;
use registrar::core::seed::{SeedOptions, Seeder};
use registrar::core::student::StudentRecord;
use registrar::core::types::{CourseId, GradeLevel, StudentId};

// =============================================================================
// Fixtures
// =============================================================================

fn registrar(capacity: usize, waitlist_capacity: usize) -> Registrar {
    Registrar::with_limits(CourseCatalog::standard(), capacity, waitlist_capacity)
}

fn enroll(reg: &Registrar, index: usize, id: &str, last: &str) -> EnrollOutcome {
    let student = reg.register_student(StudentRecord::new(id, "Test", last, GradeLevel::new(1)));
    reg.enroll(index, &student).unwrap()
}

fn roster_ids(reg: &Registrar, index: usize) -> Vec<String> {
    reg.snapshot(index)
        .unwrap()
        .roster
        .into_iter()
        .map(|s| s.id.to_string())
        .collect()
}

fn waitlist_ids(reg: &Registrar, index: usize) -> Vec<String> {
    reg.snapshot(index)
        .unwrap()
        .waitlist
        .into_iter()
        .map(|s| s.id.to_string())
        .collect()
}

// =============================================================================
// Admission scenarios
// =============================================================================

#[test]
fn four_students_two_seats_four_waitlist() {
    let reg = registrar(2, 4);
    let outcomes: Vec<_> = ["1", "2", "3", "4"]
        .iter()
        .map(|id| enroll(&reg, 0, id, &format!("Student{id}")))
        .collect();

    assert_eq!(
        outcomes,
        vec![
            EnrollOutcome::Enrolled,
            EnrollOutcome::Enrolled,
            EnrollOutcome::Waitlisted,
            EnrollOutcome::Waitlisted
        ]
    );

    let outcome = reg.drop_student(0, &StudentId::new("2")).unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Dropped {
            promoted: Some(StudentId::new("3"))
        }
    );
    assert_eq!(roster_ids(&reg, 0), vec!["1", "3"]);
    assert_eq!(waitlist_ids(&reg, 0), vec!["4"]);
}

#[test]
fn capacity_outcomes_in_order() {
    let reg = registrar(2, 1);
    let outcomes: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|id| enroll(&reg, 7, id, "Same"))
        .collect();

    assert_eq!(
        outcomes,
        vec![
            EnrollOutcome::Enrolled,
            EnrollOutcome::Enrolled,
            EnrollOutcome::Waitlisted,
            EnrollOutcome::Rejected
        ]
    );
    assert_eq!(reg.snapshot(7).unwrap().state, CourseState::Full);
}

#[test]
fn promotion_empties_waitlist() {
    let reg = registrar(2, 1);
    enroll(&reg, 0, "A", "Adams");
    enroll(&reg, 0, "B", "Baker");
    enroll(&reg, 0, "C", "Clark");

    reg.drop_student(0, &StudentId::new("A")).unwrap();

    assert_eq!(
        reg.seat_status(0).unwrap(),
        SeatStatus {
            filled: 2,
            capacity: 2
        }
    );
    assert_eq!(roster_ids(&reg, 0), vec!["B", "C"]);
    assert!(waitlist_ids(&reg, 0).is_empty());
}

#[test]
fn unknown_drop_is_side_effect_free() {
    let reg = registrar(1, 1);
    enroll(&reg, 0, "A", "Adams");
    enroll(&reg, 0, "B", "Baker");

    for _ in 0..3 {
        assert_eq!(
            reg.drop_student(0, &StudentId::new("nobody")).unwrap(),
            DropOutcome::NotEnrolled
        );
    }
    assert_eq!(roster_ids(&reg, 0), vec!["A"]);
    assert_eq!(waitlist_ids(&reg, 0), vec!["B"]);
}

#[test]
fn equal_last_names_newest_first() {
    let reg = registrar(3, 0);
    enroll(&reg, 0, "first", "Lee");
    enroll(&reg, 0, "second", "Lee");
    enroll(&reg, 0, "third", "Kim");

    assert_eq!(roster_ids(&reg, 0), vec!["third", "second", "first"]);
}

#[test]
fn same_student_in_several_courses() {
    let reg = registrar(1, 1);
    let s = reg.register_student(StudentRecord::new("x", "Ada", "Lovelace", GradeLevel::new(4)));
    for index in [0, 5, 10] {
        assert_eq!(reg.enroll(index, &s).unwrap(), EnrollOutcome::Enrolled);
    }
    assert_eq!(s.registered_courses().len(), 3);

    reg.drop_student(5, s.id()).unwrap();
    assert_eq!(s.registered_courses().len(), 2);
    assert!(!s.is_registered(&CourseId::new("CS 201")));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn project_config_sets_course_limits() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    fs::write(&global, "capacity = 3\n").unwrap();

    fs::create_dir_all(dir.path().join(".registrar")).unwrap();
    fs::write(
        dir.path().join(".registrar/config.toml"),
        "waitlist_capacity = 1\n\n[courses.\"CS 101\"]\ncapacity = 1\n",
    )
    .unwrap();

    let result = Config::load_from(Some(global.as_path()), Some(dir.path())).unwrap();
    assert!(result.warnings.is_empty());
    let reg = Registrar::new(CourseCatalog::standard(), &result.config);

    assert_eq!(reg.seat_status(0).unwrap().capacity, 3);
    assert_eq!(reg.seat_status(4).unwrap().capacity, 1);
    assert_eq!(
        result.config.limits_for(&CourseId::new("MATH 101")),
        CourseLimits {
            capacity: 3,
            waitlist_capacity: 1
        }
    );

    enroll(&reg, 4, "a", "Adams");
    assert_eq!(enroll(&reg, 4, "b", "Baker"), EnrollOutcome::Waitlisted);
    assert_eq!(enroll(&reg, 4, "c", "Clark"), EnrollOutcome::Rejected);
}

#[test]
fn unknown_course_in_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".registrar")).unwrap();
    fs::write(
        dir.path().join(".registrar/config.toml"),
        "[courses.\"ART 999\"]\ncapacity = 1\n",
    )
    .unwrap();

    let missing = dir.path().join("no-global.toml");
    assert!(Config::load_from(Some(missing.as_path()), Some(dir.path())).is_err());
}

// =============================================================================
// Random fill
// =============================================================================

fn fill(seed: u64, count: usize, options: SeedOptions) -> Registrar {
    let reg = registrar(2, 1);
    Seeder::from_seed(seed)
        .seed_registrar(&reg, count, options)
        .unwrap();
    reg
}

#[test]
fn same_seed_same_rosters() {
    let first = fill(42, 50, SeedOptions::default());
    let second = fill(42, 50, SeedOptions::default());
    assert_eq!(first.snapshots(), second.snapshots());
}

#[test]
fn fill_respects_limits_without_overflow() {
    let reg = fill(3, 200, SeedOptions::default());
    for snapshot in reg.snapshots() {
        assert!(snapshot.roster.len() <= 2);
        assert!(snapshot.waitlist.len() <= 1);
    }
}

#[test]
fn overflow_keeps_every_student() {
    let reg = registrar(2, 1);
    let report = Seeder::from_seed(9)
        .seed_registrar(&reg, 200, SeedOptions { overflow: true })
        .unwrap();

    assert_eq!(report.rejected, 0);
    assert_eq!(report.total(), 200);
    let placed: usize = reg
        .snapshots()
        .iter()
        .map(|s| s.roster.len() + s.waitlist.len())
        .sum();
    assert_eq!(placed, 200);
}
