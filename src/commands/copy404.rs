//! Single-page-app fallback for static hosting

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Copy the bundler's `index.html` to `404.html` so unknown routes load the app
pub fn run(folio: &Folio) -> Result<PathBuf> {
    let dist_dir = folio.base_dir.join(&folio.config.dev.dist_dir);
    let index = dist_dir.join("index.html");
    let not_found = dist_dir.join("404.html");

    fs::copy(&index, &not_found)
        .with_context(|| format!("Error creating 404.html from {:?}", index))?;

    tracing::info!("Copied {:?} to {:?}", index, not_found);
    Ok(not_found)
}
