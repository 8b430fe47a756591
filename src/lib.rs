//! Registrar - course enrollment with capacity-bounded rosters and waitlists
//!
//! Each course admits students into a roster kept in last-name order until
//! its capacity is reached, then defers them to a first-come, first-served
//! waitlist until that is full too. Dropping an enrolled student promotes
//! the head of the waitlist.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, drives the registrar)
//! - [`core`] - Domain types, admission rules, configuration, random fill
//! - [`ui`] - Output formatting and prompts
//!
//! # Invariants
//!
//! For every course, at all times:
//!
//! 1. The roster never holds more than `capacity` students
//! 2. The waitlist never grows past its capacity through `enroll`
//! 3. The roster is ordered by last name
//! 4. Waitlisted students are promoted in arrival order

pub mod cli;
pub mod core;
pub mod ui;
