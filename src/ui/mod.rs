//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Line prompts over any reader/writer
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! The UI module provides a consistent interface for user interaction.
//! The core hands it rows and outcomes; all text is produced here.

pub mod output;
pub mod prompts;
