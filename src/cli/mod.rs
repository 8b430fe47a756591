//! cli
//!
//! Command-line interface layer for the registrar.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up diagnostics logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`], which drive the [`crate::core`] registrar and render the
//! results through [`crate::ui`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode, if a flag decided it.
    pub interactive: Option<bool>,
    /// Default roster capacity from `--capacity`.
    pub capacity: Option<usize>,
    /// Default waitlist capacity from `--waitlist-capacity`.
    pub waitlist_capacity: Option<usize>,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Install the `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the verbosity.
/// Logs go to stderr so stdout stays clean for command output.
fn initialize_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity == Verbosity::Debug)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
        capacity: cli.capacity,
        waitlist_capacity: cli.waitlist_capacity,
    };
    initialize_tracing(ctx.verbosity());

    commands::dispatch(cli.command, &ctx)
}
