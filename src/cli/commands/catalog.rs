//! catalog command - List the course catalog

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::catalog::CourseCatalog;
use crate::core::types::CourseId;
use crate::ui::output;

#[derive(Serialize)]
struct CatalogEntry<'a> {
    index: usize,
    name: &'a CourseId,
}

/// Print every course with its index.
pub fn catalog(ctx: &Context, json: bool) -> Result<()> {
    let catalog = CourseCatalog::standard();

    if json {
        let entries: Vec<_> = catalog
            .iter()
            .map(|(index, name)| CatalogEntry { index, name })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    output::print(output::render_catalog(&catalog), ctx.verbosity());
    Ok(())
}
