//! Watch content directories and rebuild on change

use anyhow::Result;

use crate::watcher::{self, Timing};
use crate::Folio;

/// Run the watcher until Ctrl-C
pub async fn run(folio: &Folio) -> Result<()> {
    println!("🚀 Starting content watcher...");

    let (_watcher, rx) = watcher::watch_content(folio)?;
    let timing = Timing::from(&folio.config.watch);
    let mut debounce = tokio::spawn(watcher::run(rx, timing, folio.clone()));

    println!("✨ Content watcher is running! Press Ctrl+C to stop.");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("\n👋 Stopping content watcher...");
            debounce.abort();
        }
        res = &mut debounce => {
            if let Err(e) = res {
                tracing::error!("Watcher task failed: {}", e);
            }
        }
    }

    Ok(())
}
