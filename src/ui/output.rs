//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Rendering functions return strings so callers decide where they go;
//! the printing helpers apply the verbosity rules.

use std::fmt::{Display, Write as _};

use crate::core::catalog::CourseCatalog;
use crate::core::course::{DropOutcome, EnrollOutcome, SeatStatus};
use crate::core::registrar::{CourseSnapshot, StudentSummary};
use crate::core::student::StudentRecord;
use crate::core::types::{CourseId, StudentId};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter directive for this verbosity.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "registrar=debug",
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a student as `First Last`.
pub fn full_name(student: &StudentRecord) -> String {
    format!("{} {}", student.first_name(), student.last_name())
}

/// Describe an enroll outcome in a sentence.
pub fn describe_enroll(outcome: EnrollOutcome, student: &StudentRecord, course: &CourseId) -> String {
    let name = full_name(student);
    match outcome {
        EnrollOutcome::Enrolled => format!("Enrollment successful for {} in {}.", name, course),
        EnrollOutcome::Waitlisted => {
            format!("{} is full. {} added to waitlist.", course, name)
        }
        EnrollOutcome::Rejected => format!(
            "{} and its waitlist are full. {} was not added.",
            course, name
        ),
    }
}

/// Describe a drop outcome in a sentence.
pub fn describe_drop(outcome: &DropOutcome, id: &StudentId, course: &CourseId) -> String {
    match outcome {
        DropOutcome::Dropped { promoted: None } => {
            format!("Student {} dropped from {}.", id, course)
        }
        DropOutcome::Dropped {
            promoted: Some(next),
        } => format!(
            "Student {} dropped from {}. Student {} promoted from the waitlist.",
            id, course, next
        ),
        DropOutcome::NotEnrolled => format!("Student {} is not enrolled in {}.", id, course),
    }
}

fn student_line(out: &mut String, s: &StudentSummary) {
    let _ = writeln!(
        out,
        "  {} {} (ID: {}, Grade: {})",
        s.first_name, s.last_name, s.id, s.grade_level
    );
}

/// Render a course's roster and waitlist.
pub fn render_course(snapshot: &CourseSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{} enrolled, waitlist {}/{}]",
        snapshot.id,
        snapshot.seats,
        snapshot.waitlist.len(),
        snapshot.waitlist_capacity
    );

    out.push_str("Enrolled Students:\n");
    if snapshot.roster.is_empty() {
        out.push_str("  (none)\n");
    }
    for s in &snapshot.roster {
        student_line(&mut out, s);
    }

    out.push_str("Waitlisted Students:\n");
    if snapshot.waitlist.is_empty() {
        out.push_str("  (none)\n");
    }
    for s in &snapshot.waitlist {
        student_line(&mut out, s);
    }
    out
}

/// Render the catalog as `index  name` lines.
pub fn render_catalog(catalog: &CourseCatalog) -> String {
    catalog
        .iter()
        .map(|(index, id)| format!("{:>2}  {}", index, id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render seat status per course as an aligned table.
pub fn render_seat_report(report: &[(CourseId, SeatStatus)]) -> String {
    let width = report
        .iter()
        .map(|(id, _)| id.as_str().len())
        .max()
        .unwrap_or(0);
    report
        .iter()
        .map(|(id, seats)| format!("{:<width$}  {}", id.as_str(), seats, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
