//! config command - Show the effective configuration

use std::path::Path;

use anyhow::{bail, Result};

use super::{load_config, working_dir};
use crate::cli::Context;
use crate::core::catalog::CourseCatalog;
use crate::core::config::{Config, CourseLimits, RegistrarConfig};
use crate::ui::output;

fn describe_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string())
}

/// Print resolved settings, per-course overrides, and source files.
///
/// With `init`, write the effective default limits to the project config
/// file instead. An existing project config is never overwritten.
pub fn config(ctx: &Context, init: bool) -> Result<()> {
    let config = load_config(ctx)?;
    let verbosity = ctx.verbosity();

    if init {
        let dir = working_dir(ctx)?;
        if let Some(existing) = config.project_config_loaded_from() {
            bail!("project config already exists at {}", existing.display());
        }
        let project = RegistrarConfig {
            capacity: Some(config.capacity()),
            waitlist_capacity: Some(config.waitlist_capacity()),
            ..RegistrarConfig::default()
        };
        let path = Config::write_project(&dir, &project)?;
        output::print(format!("Wrote {}", path.display()), verbosity);
        return Ok(());
    }

    let defaults = CourseLimits {
        capacity: config.capacity(),
        waitlist_capacity: config.waitlist_capacity(),
    };

    let mut lines = vec![
        format!("capacity = {}", defaults.capacity),
        format!("waitlist_capacity = {}", defaults.waitlist_capacity),
        format!("interactive = {}", config.interactive()),
        format!("seed.students = {}", config.seed_students()),
        format!(
            "seed.rng_seed = {}",
            config
                .rng_seed()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(random)".to_string())
        ),
    ];

    for (_, id) in CourseCatalog::standard().iter() {
        let limits = config.limits_for(id);
        if limits != defaults {
            lines.push(format!(
                "courses.\"{}\" = capacity {}, waitlist {}",
                id, limits.capacity, limits.waitlist_capacity
            ));
        }
    }

    let global = match config.global_config_loaded_from() {
        Some(path) => path.display().to_string(),
        None => match Config::global_config_path() {
            Ok(path) => format!("(none, default location {})", path.display()),
            Err(_) => "(none)".to_string(),
        },
    };
    lines.push(format!("global config: {}", global));
    lines.push(format!(
        "project config: {}",
        describe_path(config.project_config_loaded_from())
    ));

    output::print(lines.join("\n"), verbosity);
    Ok(())
}
