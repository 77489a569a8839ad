//! Pinlock - binary entry point.
//!
//! Wires the [`pinlock::console::Console`] menu loop to locked stdin and
//! stdout, after initialising file-based tracing. The session itself is
//! built from the compile-time access code.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pinlock::console::Console;
use pinlock_engine::{ACCESS_CODE, PinCode, Session};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over interleaving log
    // lines with the interactive menu on stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.pinlock/logs/pinlock.log
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".pinlock").join("logs").join("pinlock.log"));
    }

    // Fallback: ./.pinlock/logs/pinlock.log (useful in constrained environments)
    candidates.push(PathBuf::from(".pinlock").join("logs").join("pinlock.log"));

    candidates
}

fn main() -> Result<()> {
    init_tracing();

    let authorised: PinCode = ACCESS_CODE
        .parse()
        .context("the authorised access code must be a valid PIN")?;
    let mut session = Session::new(authorised);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let end = Console::new(stdin, stdout).run(&mut session)?;

    tracing::info!(?end, "console loop finished");
    Ok(())
}
