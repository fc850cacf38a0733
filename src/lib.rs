//! folio-content: content build pipeline for a portfolio and blog site
//!
//! Markdown files with YAML front-matter are loaded, normalized and sorted,
//! then emitted as generated JavaScript data modules that the site's UI
//! imports. A watcher rebuilds the affected collection when content changes.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;
pub mod watcher;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::Collection;
use generator::{BuildReport, Generator};

/// Configuration file looked up in the base directory
pub const CONFIG_FILE: &str = "folio.yml";

/// The main application
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog post sources
    pub blog_dir: PathBuf,
    /// Project sources
    pub projects_dir: PathBuf,
    /// Generated blog module
    pub blog_module: PathBuf,
    /// Generated projects module
    pub projects_module: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let blog_dir = base_dir.join(&config.blog_dir);
        let projects_dir = base_dir.join(&config.projects_dir);
        let blog_module = base_dir.join(&config.blog_module);
        let projects_module = base_dir.join(&config.projects_module);

        Self {
            config,
            base_dir,
            blog_dir,
            projects_dir,
            blog_module,
            projects_module,
        }
    }

    /// Source directory of a collection
    pub fn content_dir(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Blog => &self.blog_dir,
            Collection::Projects => &self.projects_dir,
        }
    }

    /// Generated module of a collection
    pub fn module_path(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Blog => &self.blog_module,
            Collection::Projects => &self.projects_module,
        }
    }

    /// Build one collection's generated module
    pub fn build(&self, collection: Collection) -> error::Result<BuildReport> {
        Generator::new(self).build(collection)
    }

    /// Build the blog module
    pub fn build_blog(&self) -> error::Result<BuildReport> {
        self.build(Collection::Blog)
    }

    /// Build the projects module
    pub fn build_projects(&self) -> error::Result<BuildReport> {
        self.build(Collection::Projects)
    }
}
