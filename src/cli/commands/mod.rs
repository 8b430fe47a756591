//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and applies flag overrides
//! 2. Drives the registrar
//! 3. Formats and displays output
//!
//! Course state is in-memory only, so every invocation starts empty.

mod catalog;
mod completion;
mod config_cmd;
mod shell;
mod simulate;

// Re-export command functions for testing and direct invocation
pub use catalog::catalog;
pub use completion::completion;
pub use config_cmd::config;
pub use shell::{run_shell, shell};
pub use simulate::simulate;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::args::Command;
use super::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Catalog { json } => catalog::catalog(ctx, json),
        Command::Shell => shell::shell(ctx),
        Command::Simulate {
            students,
            seed,
            course,
            overflow,
            json,
        } => simulate::simulate(ctx, students, seed, course.as_deref(), overflow, json),
        Command::Config { init } => config_cmd::config(ctx, init),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// The `--cwd` override, or the process working directory.
pub(crate) fn working_dir(ctx: &Context) -> Result<PathBuf> {
    match &ctx.cwd {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("Failed to determine working directory"),
    }
}

/// Load configuration for the working directory and apply flag overrides.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    let cwd = working_dir(ctx)?;
    let result = Config::load(Some(&cwd)).context("Failed to load configuration")?;
    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            ctx.verbosity(),
        );
    }

    let config = result
        .config
        .with_default_limits(ctx.capacity, ctx.waitlist_capacity)?;
    Ok(config)
}
