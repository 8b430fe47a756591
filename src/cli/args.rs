//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output
//! - `--capacity`, `--waitlist-capacity`: Default course limits

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Registrar - course enrollment with capacity-bounded rosters and waitlists
#[derive(Parser, Debug)]
#[command(name = "reg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if reg was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Default roster capacity for every course
    #[arg(long, global = true, value_name = "N")]
    pub capacity: Option<usize>,

    /// Default waitlist capacity for every course
    #[arg(long, global = true, value_name = "N")]
    pub waitlist_capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Interactive mode as requested by flags.
    ///
    /// Returns `None` when no flag decides it; the caller then falls back
    /// to configuration and whether stdin is a terminal.
    pub fn interactive(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet {
            Some(false)
        } else {
            None
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the course catalog
    #[command(
        name = "catalog",
        after_help = "\
EXAMPLES:
    # Show every course with its index
    reg catalog

    # Machine-readable listing
    reg catalog --json"
    )]
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register students interactively
    #[command(
        name = "shell",
        long_about = "Start an interactive registration session.\n\n\
            Students are registered and enrolled one at a time. When a course is \
            full the student goes on its waitlist; when the waitlist is full too \
            the request is rejected. Dropping an enrolled student promotes the \
            first waitlisted student into the freed seat.\n\n\
            All state lives in memory and is discarded when the session ends.",
        after_help = "\
SESSION COMMANDS:
    enroll    register a student and enroll them in a course
    drop      drop a student from a course
    list      show a course's roster and waitlist
    status    show seats filled for every course
    student   show the courses a student holds
    help      show this list
    quit      end the session

SCRIPTED INPUT:
    printf 'enroll\\nAda\\nLovelace\\n1\\n2\\nMATH 101\\nquit\\n' | reg shell --no-interactive"
    )]
    Shell,

    /// Fill courses with generated students and show the result
    #[command(
        name = "simulate",
        after_help = "\
EXAMPLES:
    # Reproducible fill of 60 students
    reg simulate --seed 42

    # Show one course only
    reg simulate --seed 42 --course 'CS 101'

    # Seed past waitlist limits through the bulk hook
    reg simulate --students 200 --overflow"
    )]
    Simulate {
        /// Number of students to generate
        #[arg(long, value_name = "N")]
        students: Option<usize>,

        /// RNG seed for a reproducible fill
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Show only this course (index or name)
        #[arg(long, value_name = "COURSE")]
        course: Option<String>,

        /// Put rejected students on the waitlist anyway
        #[arg(long)]
        overflow: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    #[command(
        name = "config",
        after_help = "\
EXAMPLES:
    # Show settings and where they came from
    reg config

    # Save the effective limits to .registrar/config.toml
    reg --capacity 30 --waitlist-capacity 5 config --init"
    )]
    Config {
        /// Write the effective limits to the project config file
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    reg completion bash > ~/.local/share/bash-completion/completions/reg

    # Zsh
    reg completion zsh > ~/.zfunc/_reg

    # Fish
    reg completion fish > ~/.config/fish/completions/reg.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported by `completion`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
