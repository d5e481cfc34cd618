//! TeamerHQ CLI
//!
//! Serves the landing page and status dashboard, and prints the same status
//! data in the terminal.

use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::path::Path;
use teamer_core::TeamerResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Open the log file for appending, creating its directory if needed.
fn open_log_file(path: &Path) -> TeamerResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(file)
}

/// Initialize tracing with optional file logging.
fn init_tracing(log_file: Option<&Path>, verbose: bool) -> TeamerResult<()> {
    let default_filter = if verbose {
        "teamerhq=debug,teamer_web=debug,teamer_core=debug,tower_http=debug"
    } else {
        "teamerhq=info,teamer_web=debug,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        let file = open_log_file(path)?;

        // Log to both stdout and file
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) => args.log_path(),
        _ => None,
    };
    init_tracing(log_file.as_deref(), cli.verbose)?;

    cli.execute().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamer_core::TeamerError;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("teamerhq-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = scratch_dir("logs");
        let path = dir.join("nested/serve.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_log_file_reports_io_error() {
        let dir = scratch_dir("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let err = open_log_file(&blocker.join("serve.log")).unwrap_err();
        assert!(matches!(err, TeamerError::Io(_)));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
