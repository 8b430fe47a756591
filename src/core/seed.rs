//! core::seed
//!
//! Random fill: generates plausible students and spreads them over the
//! catalog.
//!
//! The random source is injected, so a fixed seed gives the same students
//! in the same courses on every run.
//!
//! # Example
//!
//! ```
//! use registrar::core::catalog::CourseCatalog;
//! use registrar::core::registrar::Registrar;
//! use registrar::core::seed::{SeedOptions, Seeder};
//!
//! let registrar = Registrar::with_limits(CourseCatalog::standard(), 3, 2);
//! let mut seeder = Seeder::from_seed(7);
//! let report = seeder.seed_registrar(&registrar, 40, SeedOptions::default()).unwrap();
//! assert_eq!(report.total(), 40);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use super::course::EnrollOutcome;
use super::registrar::{Registrar, RegistrarError};
use super::student::StudentRecord;
use super::types::{GradeLevel, StudentId};

const FIRST_NAMES: [&str; 16] = [
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Katherine", "Linus", "Margaret", "Niklaus", "Radia",
];

const LAST_NAMES: [&str; 16] = [
    "Allen", "Backus", "Cerf", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Kay", "Knuth",
    "Lamarr", "Lee", "Liskov", "Lovelace", "Perlman", "Turing", "Wirth",
];

/// How the fill treats courses that reject a student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Put rejected students on the waitlist anyway, through the unchecked
    /// seeding hook.
    pub overflow: bool,
}

/// Counts of what the fill did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub enrolled: usize,
    pub waitlisted: usize,
    pub rejected: usize,
    pub overflowed: usize,
}

impl SeedReport {
    /// Students generated.
    pub fn total(&self) -> usize {
        self.enrolled + self.waitlisted + self.rejected + self.overflowed
    }
}

/// Generates students from an injected random source.
#[derive(Debug)]
pub struct Seeder<R> {
    rng: R,
    next_id: u32,
}

impl Seeder<StdRng> {
    /// Deterministic seeder.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Seeder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Generate one student. Ids are sequential: `S0001`, `S0002`, ...
    pub fn next_student(&mut self) -> StudentRecord {
        let id = StudentId::new(format!("S{:04}", self.next_id));
        self.next_id += 1;
        let first = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())];
        let grade = GradeLevel::new(self.rng.random_range(1..=4));
        StudentRecord::new(id, first, last, grade)
    }

    /// Generate `count` students and enroll each in a random course.
    pub fn seed_registrar(
        &mut self,
        registrar: &Registrar,
        count: usize,
        options: SeedOptions,
    ) -> Result<SeedReport, RegistrarError> {
        let mut report = SeedReport::default();
        let courses = registrar.course_count();
        if courses == 0 {
            return Ok(report);
        }

        for _ in 0..count {
            let student = registrar.register_student(self.next_student());
            let index = self.rng.random_range(0..courses);
            match registrar.enroll(index, &student)? {
                EnrollOutcome::Enrolled => report.enrolled += 1,
                EnrollOutcome::Waitlisted => report.waitlisted += 1,
                EnrollOutcome::Rejected if options.overflow => {
                    registrar.add_to_waitlist(index, &student)?;
                    report.overflowed += 1;
                }
                EnrollOutcome::Rejected => report.rejected += 1,
            }
        }

        debug!(?report, "random fill complete");
        Ok(report)
    }
}
