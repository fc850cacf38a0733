//! Build generated data modules

use anyhow::{Context, Result};
use std::time::Instant;

use crate::content::Collection;
use crate::Folio;

/// Build one collection and report what was generated
pub fn run(folio: &Folio, collection: Collection) -> Result<()> {
    let start = Instant::now();

    let report = folio
        .build(collection)
        .with_context(|| format!("failed to build {} data", collection))?;

    let (noun, label) = match collection {
        Collection::Blog => ("blog", "Posts"),
        Collection::Projects => ("project", "Projects"),
    };
    println!(
        "✅ Generated {} data from {} markdown files",
        noun,
        report.count()
    );
    println!("📁 Output: {}", report.output.display());
    println!("📝 {}: {}", label, report.titles.join(", "));

    tracing::debug!(
        "Built {} in {:.2}s",
        collection,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Build every collection, stopping at the first failure
pub fn run_all(folio: &Folio) -> Result<()> {
    for collection in Collection::ALL {
        run(folio, collection)?;
    }
    Ok(())
}
