//! Development mode: content watcher plus the site's dev server

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};

use super::build;
use crate::watcher::{self, Timing};
use crate::Folio;

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Output line of a child process tagged with its source
pub fn prefix_line(label: &str, color: &str, line: &str) -> String {
    format!("{}[{}]{} {}", color, label, RESET, line)
}

/// Spawn `command` through the platform shell with output forwarded line by line
fn spawn_prefixed(command: &str, cwd: &Path, label: &'static str, color: &'static str) -> Result<Child> {
    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    };

    let mut child = cmd
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("Failed to start `{}`", command))?;

    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(forward(stdout, label, color));
    }
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(forward(stderr, label, color));
    }
    Ok(child)
}

async fn forward<R: AsyncRead + Unpin>(stream: R, label: &'static str, color: &'static str) {
    let mut lines = BufReader::new(stream).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim_end();
        if !line.is_empty() {
            println!("{}", prefix_line(label, color, line));
        }
    }
}

/// Build everything, then run the watcher and dev server until Ctrl-C
pub async fn run(folio: &Folio) -> Result<()> {
    println!("🚀 Starting development environment...");

    println!("📝 Building initial content...");
    build::run_all(folio).context("Initial build failed")?;

    let (_watcher, rx) = watcher::watch_content(folio)?;
    let timing = Timing::from(&folio.config.watch);
    let debounce = tokio::spawn(watcher::run(rx, timing, folio.clone()));

    tokio::time::sleep(Duration::from_millis(folio.config.dev.startup_delay_ms)).await;

    let command = &folio.config.dev.command;
    println!("🌐 Starting dev server: {}", command);
    let mut server = spawn_prefixed(command, &folio.base_dir, "VITE", GREEN)?;

    println!("✨ Development environment is ready! Press Ctrl+C to stop.");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("\n👋 Shutting down all processes...");
            if let Err(e) = server.kill().await {
                tracing::warn!("Failed to stop dev server: {}", e);
            }
        }
        status = server.wait() => {
            let status = status?;
            println!("{}", prefix_line("VITE", GREEN, &format!("Process exited with {}", status)));
        }
    }

    debounce.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_line() {
        assert_eq!(
            prefix_line("VITE", GREEN, "ready in 300 ms"),
            "\x1b[32m[VITE]\x1b[0m ready in 300 ms"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawned_command_runs_in_base_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut child = spawn_prefixed("touch started", tmp.path(), "VITE", GREEN).unwrap();
        assert!(child.wait().await.unwrap().success());
        assert!(tmp.path().join("started").exists());
    }

    #[tokio::test]
    async fn test_initial_build_failure_aborts() {
        let tmp = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        std::fs::create_dir_all(&folio.blog_dir).unwrap();
        std::fs::write(folio.blog_dir.join("bad.md"), "---\ntitle: [oops\n---\n").unwrap();

        let err = run(&folio).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Initial build failed"));
    }
}
