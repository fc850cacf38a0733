//! Site configuration (folio.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Content
    pub blog_dir: String,
    pub projects_dir: String,

    // Generated modules
    pub blog_module: String,
    pub projects_module: String,
    /// Hand-maintained data module that `add` splices posts into
    pub blog_data: String,
    /// Also write the sorted records as `<module>.json`
    pub emit_json: bool,

    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub dev: DevConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            blog_dir: "src/content/blog".to_string(),
            projects_dir: "src/content/projects".to_string(),
            blog_module: "src/utils/blogDataGenerated.js".to_string(),
            projects_module: "src/utils/projectDataGenerated.js".to_string(),
            blog_data: "src/utils/blogData.js".to_string(),
            emit_json: false,
            watch: WatchConfig::default(),
            dev: DevConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse {:?}", path))?;
        Ok(config)
    }
}

/// Content watcher timing and filters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Quiet period that collapses bursts of events into one rebuild
    pub debounce_ms: u64,
    /// Minimum time between the starts of two rebuilds
    pub cooldown_ms: u64,
    /// File extensions (without the dot) that trigger a rebuild
    pub extensions: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            cooldown_ms: 2000,
            extensions: vec!["md".to_string(), "js".to_string()],
        }
    }
}

impl WatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

/// Development server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevConfig {
    /// Shell command that starts the front-end dev server
    pub command: String,
    /// Delay between starting the watcher and the dev server
    pub startup_delay_ms: u64,
    /// Build output directory of the front-end bundler
    pub dist_dir: String,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            command: "npm run dev".to_string(),
            startup_delay_ms: 1000,
            dist_dir: "dist".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.blog_dir, "src/content/blog");
        assert_eq!(config.watch.debounce_ms, 1000);
        assert_eq!(config.watch.cooldown_ms, 2000);
        assert!(!config.emit_json);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
blog_dir: content/posts
emit_json: true
watch:
  cooldown_ms: 500
dev:
  command: pnpm dev
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.blog_dir, "content/posts");
        assert_eq!(config.projects_dir, "src/content/projects");
        assert!(config.emit_json);
        assert_eq!(config.watch.cooldown(), Duration::from_millis(500));
        assert_eq!(config.watch.debounce_ms, 1000);
        assert_eq!(config.watch.extensions, vec!["md", "js"]);
        assert_eq!(config.dev.command, "pnpm dev");
        assert_eq!(config.dev.dist_dir, "dist");
    }
}
