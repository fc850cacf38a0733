//! Generator module - renders collections into generated data modules

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::loader::ContentLoader;
use crate::content::{Collection, Entry};
use crate::error::{ContentError, Result};
use crate::templates;
use crate::Folio;

/// Outcome of one collection build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub collection: Collection,
    pub output: PathBuf,
    /// Titles in emitted order
    pub titles: Vec<String>,
}

impl BuildReport {
    pub fn count(&self) -> usize {
        self.titles.len()
    }
}

/// Builds the generated module for each collection
pub struct Generator<'a> {
    folio: &'a Folio,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load, sort and emit one collection
    pub fn build(&self, collection: Collection) -> Result<BuildReport> {
        let dir = self.folio.content_dir(collection);
        if !dir.exists() {
            tracing::info!("Creating content directory {:?}", dir);
            fs::create_dir_all(dir).map_err(|e| ContentError::io(dir, e))?;
        }

        let loader = ContentLoader::new(self.folio);
        match collection {
            Collection::Blog => {
                let posts = loader.load_posts()?;
                self.emit(collection, &posts)
            }
            Collection::Projects => {
                let projects = loader.load_projects()?;
                self.emit(collection, &projects)
            }
        }
    }

    /// Write the module (and the JSON sidecar when enabled) for sorted records
    fn emit<T: Entry + Serialize>(&self, collection: Collection, records: &[T]) -> Result<BuildReport> {
        let output = self.folio.module_path(collection).to_path_buf();
        let json = serde_json::to_string_pretty(records)?;
        let module = templates::render_module(collection, &json);

        write_file(&output, &module)?;
        tracing::debug!("Wrote {} bytes to {:?}", module.len(), output);

        if self.folio.config.emit_json {
            let json_path = output.with_extension("json");
            write_file(&json_path, &format!("{}\n", json))?;
            tracing::debug!("Wrote {:?}", json_path);
        }

        Ok(BuildReport {
            collection,
            output,
            titles: records.iter().map(|r| r.title().to_string()).collect(),
        })
    }
}

/// Overwrite `path` in full, creating its parent directory
fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ContentError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| ContentError::io(path, e))
}
