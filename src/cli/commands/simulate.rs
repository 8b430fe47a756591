//! simulate command - Fill the catalog with generated students

use anyhow::Result;
use serde::Serialize;

use super::load_config;
use crate::cli::Context;
use crate::core::catalog::CourseCatalog;
use crate::core::registrar::{CourseSnapshot, Registrar};
use crate::core::seed::{SeedOptions, SeedReport, Seeder};
use crate::ui::output;

#[derive(Serialize)]
struct SimulationOutput<'a> {
    seed: u64,
    report: SeedReport,
    courses: &'a [CourseSnapshot],
}

/// Seed a fresh registrar and print the resulting rosters.
///
/// Without `--course`, only courses that received someone are shown.
/// The seed is always reported so a run can be repeated.
pub fn simulate(
    ctx: &Context,
    students: Option<usize>,
    seed: Option<u64>,
    course: Option<&str>,
    overflow: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(ctx)?;
    let registrar = Registrar::new(CourseCatalog::standard(), &config);

    let only = course
        .map(|input| registrar.catalog().resolve(input))
        .transpose()?;
    let count = students.unwrap_or_else(|| config.seed_students());
    let seed = seed
        .or_else(|| config.rng_seed())
        .unwrap_or_else(rand::random);

    let mut seeder = Seeder::from_seed(seed);
    let report = seeder.seed_registrar(&registrar, count, SeedOptions { overflow })?;

    let courses: Vec<CourseSnapshot> = match only {
        Some(index) => vec![registrar.snapshot(index)?],
        None => registrar
            .snapshots()
            .into_iter()
            .filter(|s| !s.roster.is_empty() || !s.waitlist.is_empty())
            .collect(),
    };

    if json {
        let out = SimulationOutput {
            seed,
            report,
            courses: &courses,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let verbosity = ctx.verbosity();
    for snapshot in &courses {
        output::print(output::render_course(snapshot), verbosity);
    }
    output::print(
        format!(
            "Seeded {} students (seed {}): {} enrolled, {} waitlisted, {} overflowed, {} rejected.",
            report.total(),
            seed,
            report.enrolled,
            report.waitlisted,
            report.overflowed,
            report.rejected
        ),
        verbosity,
    );
    Ok(())
}
