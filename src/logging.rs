//! Logger setup for the binary.
//!
//! Filter directives come from `RUST_LOG`, defaulting to `info`. The TUI owns
//! the terminal while it runs, so interactive sessions write to a file and
//! headless runs write to stderr.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::error::{Context, Result};

const DEFAULT_FILTER: &str = "info";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to, created if missing.
    File(PathBuf),
}

/// Install the global logger. Call once, before any work starts.
pub fn init_logging(target: &LogTarget) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            buf.timestamp_seconds(),
            record.level(),
            record.target(),
            record.args()
        )
    });

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            builder.target(Target::Pipe(Box::new(open_log_file(path)?)));
            builder.write_style(env_logger::WriteStyle::Never);
        }
    }

    builder.try_init().context("Failed to install logger")?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(file)
}
