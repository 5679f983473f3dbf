//! # depfetch CLI Entry Point
//!
//! Parses the handful of flags with clap, then runs a single fetch of the
//! pinned library. Errors propagate out of `main` so the process exits
//! non-zero with the full error chain.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use depfetch::config::{FetchOptions, NLOHMANN_JSON, OnExisting};
use depfetch::deps;

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

#[derive(Parser)]
#[command(name = "depfetch")]
#[command(about = "Fetch nlohmann/json v3.12.0 into ./json", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Directory to stage and extract into [default: current directory]
    #[arg(long)]
    dir: Option<PathBuf>,
    /// What to do if the target directory already exists
    #[arg(long, value_enum, default_value_t = OnExisting::Fail)]
    on_existing: OnExisting,
    /// Suppress status lines and progress bars
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    enable_windows_utf8_console();

    let cli = Cli::parse();
    let base_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let options = FetchOptions::new(base_dir)
        .with_policy(cli.on_existing)
        .quiet(cli.quiet);

    deps::fetch_library(&NLOHMANN_JSON, &options)?;
    Ok(())
}
