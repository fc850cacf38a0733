//! Content watcher
//!
//! Filesystem events are filtered down to content changes and fed through a
//! channel into [`run`], which collapses bursts inside a debounce window and
//! drops batches that arrive within the cooldown of the previous build.
//! Rebuilds run inline in that single task, so at most one is in flight.

use anyhow::Result;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::Instant;

use crate::config::WatchConfig;
use crate::content::Collection;
use crate::Folio;

/// A change to a file inside one of the content directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub collection: Collection,
    pub path: PathBuf,
}

/// Something that can rebuild a collection's output
pub trait Rebuild {
    fn rebuild(&mut self, collection: Collection) -> Result<()>;
}

impl Rebuild for Folio {
    fn rebuild(&mut self, collection: Collection) -> Result<()> {
        let report = self.build(collection)?;
        tracing::info!(
            "Generated {} data from {} markdown files",
            collection,
            report.count()
        );
        Ok(())
    }
}

/// Debounce and cooldown windows
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub debounce: Duration,
    pub cooldown: Duration,
}

impl From<&WatchConfig> for Timing {
    fn from(config: &WatchConfig) -> Self {
        Self {
            debounce: config.debounce(),
            cooldown: config.cooldown(),
        }
    }
}

/// Maps raw filesystem paths to content changes
#[derive(Debug, Clone)]
pub struct ChangeFilter {
    dirs: Vec<(Collection, PathBuf)>,
    extensions: Vec<String>,
}

impl ChangeFilter {
    pub fn new(folio: &Folio) -> Self {
        let mut dirs = Vec::new();
        for collection in Collection::ALL {
            let dir = folio.content_dir(collection).to_path_buf();
            // Watchers may report canonical paths (e.g. /private/var on macOS)
            if let Ok(canonical) = fs::canonicalize(&dir) {
                if canonical != dir {
                    dirs.push((collection, canonical));
                }
            }
            dirs.push((collection, dir));
        }

        Self {
            dirs,
            extensions: folio.config.watch.extensions.clone(),
        }
    }

    /// The change `path` represents, if it is a watched file in a content directory
    pub fn classify(&self, path: &Path) -> Option<ChangeEvent> {
        let name = path.file_name()?.to_str()?;
        let watched = self
            .extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext.trim_start_matches('.'))));
        if !watched {
            return None;
        }

        self.dirs
            .iter()
            .find(|(_, dir)| path.starts_with(dir))
            .map(|(collection, _)| ChangeEvent {
                collection: *collection,
                path: path.to_path_buf(),
            })
    }
}

/// Start watching both content directories (created if missing).
///
/// The returned watcher must be kept alive for events to keep flowing.
pub fn watch_content(folio: &Folio) -> Result<(RecommendedWatcher, UnboundedReceiver<ChangeEvent>)> {
    for collection in Collection::ALL {
        let dir = folio.content_dir(collection);
        if !dir.exists() {
            println!("📁 Creating directory: {}", dir.display());
            fs::create_dir_all(dir)?;
        }
    }

    let filter = ChangeFilter::new(folio);
    let (tx, rx) = mpsc::unbounded_channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Access(_)) {
                    return;
                }
                for path in &event.paths {
                    if let Some(change) = filter.classify(path) {
                        tracing::info!("📁 {:?}: {} in {}", event.kind, path.display(), change.collection);
                        let _ = tx.send(change);
                    }
                }
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        }
    })?;

    for collection in Collection::ALL {
        let dir = folio.content_dir(collection);
        watcher.watch(dir, RecursiveMode::Recursive)?;
        println!("👀 Watching {} directory: {}", collection, dir.display());
    }

    Ok((watcher, rx))
}

/// Debounce loop: runs until the event channel closes.
///
/// Pending changes are flushed when the channel closes mid-window.
pub async fn run<R: Rebuild>(mut rx: UnboundedReceiver<ChangeEvent>, timing: Timing, mut rebuilder: R) {
    let mut last_build: Option<Instant> = None;

    while let Some(first) = rx.recv().await {
        let mut pending: BTreeMap<Collection, Vec<PathBuf>> = BTreeMap::new();
        pending.entry(first.collection).or_default().push(first.path);

        let mut open = true;
        loop {
            let deadline = Instant::now() + timing.debounce;
            tokio::select! {
                event = rx.recv() => match event {
                    Some(change) => {
                        pending.entry(change.collection).or_default().push(change.path);
                    }
                    None => {
                        open = false;
                        break;
                    }
                },
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }

        let now = Instant::now();
        let cooling = last_build.is_some_and(|last| now.duration_since(last) < timing.cooldown);
        if cooling {
            tracing::info!("⏳ Skipping build - still in cooldown period");
        } else {
            last_build = Some(now);
            rebuild_pending(&mut rebuilder, &pending);
        }

        if !open {
            break;
        }
    }
}

fn rebuild_pending<R: Rebuild>(rebuilder: &mut R, pending: &BTreeMap<Collection, Vec<PathBuf>>) {
    let changed: Vec<String> = pending
        .values()
        .flatten()
        .map(|p| p.display().to_string())
        .collect();
    tracing::info!("🔄 Detected changes in: {}", changed.join(", "));

    let mut failed = false;
    for collection in pending.keys() {
        tracing::info!("Building {} data...", collection);
        match rebuilder.rebuild(*collection) {
            Ok(()) => tracing::info!("✅ {} build completed", collection),
            Err(e) => {
                failed = true;
                tracing::error!("❌ Build failed: {:#}", e);
            }
        }
    }

    if !failed {
        tracing::info!("🎉 All builds completed successfully!");
    }
}
