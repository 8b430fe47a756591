//! core
//!
//! Domain types and the admission-control core.
//!
//! # Modules
//!
//! - [`types`] - Strong types: StudentId, CourseId, GradeLevel
//! - [`student`] - Shared student records and their registrations
//! - [`roster`] - Last-name ordered list of enrolled students
//! - [`waitlist`] - FIFO list of deferred students
//! - [`course`] - Per-course admission state machine
//! - [`catalog`] - The fixed course catalog
//! - [`registrar`] - Lockable courses plus the student directory
//! - [`seed`] - Injectable random fill
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Course operations are total: full, rejected, and not-found are
//!   returned outcomes, never errors
//! - The core never formats text; it hands rows to the UI layer
//! - Each course is an independent unit of mutual exclusion

pub mod catalog;
pub mod config;
pub mod course;
pub mod registrar;
pub mod roster;
pub mod seed;
pub mod student;
pub mod types;
pub mod waitlist;
