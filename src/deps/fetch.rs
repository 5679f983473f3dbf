//! End-to-end fetch of a pinned library.

use super::download::{fetch_archive, persist_archive};
use super::extract::extract_archive;
use super::stage::{Normalized, ensure_staging_dir, is_occupied, normalize_dir_name};
use crate::config::{FetchOptions, LibraryPin, OnExisting};
use crate::ui;
use anyhow::{Result, bail};
use colored::*;
use std::path::PathBuf;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReport {
    /// The library was downloaded and staged at `path`.
    Fetched {
        path: PathBuf,
        archive: PathBuf,
        bytes: usize,
        replaced: bool,
    },
    /// The target already existed and `OnExisting::Skip` was in effect.
    Skipped { path: PathBuf },
}

/// Downloads, extracts and renames `pin` under `options.base_dir`.
///
/// Steps run strictly in order and nothing is undone on failure: a failed
/// extraction leaves the archive in the staging directory, a failed rename
/// leaves the version-suffixed directory next to the target.
pub fn fetch_library(pin: &LibraryPin, options: &FetchOptions) -> Result<FetchReport> {
    let base = options.base_dir.as_path();
    let quiet = options.quiet;
    let target = base.join(pin.target_name());

    if options.on_existing == OnExisting::Skip && is_occupied(&target) {
        ui::status(
            quiet,
            "!".yellow(),
            format!("{} is already present at {}", pin.name, target.display()),
        );
        return Ok(FetchReport::Skipped { path: target });
    }

    let staging = ensure_staging_dir(base)?;

    ui::status(
        quiet,
        "⬇".blue(),
        format!("Downloading {} v{}...", pin.name, pin.version),
    );
    let bytes = fetch_archive(&pin.url, quiet)?;
    let archive = persist_archive(&staging, &pin.archive_name, &bytes)?;

    ui::status(
        quiet,
        "📦".blue(),
        format!("Extracting {}...", archive.display()),
    );
    let extraction = extract_archive(&archive, base, quiet)?;
    if extraction.skipped > 0 {
        ui::status(
            quiet,
            "!".yellow(),
            format!(
                "Ignored {} archive entries pointing outside {}",
                extraction.skipped,
                base.display()
            ),
        );
    }

    let extracted_dir = pin.extracted_dir_name();
    if !extraction.top_level.contains(&extracted_dir) {
        let found: Vec<&str> = extraction.top_level.iter().map(String::as_str).collect();
        bail!(
            "Expected extracted directory {} was not found (archive top level: {})",
            base.join(&extracted_dir).display(),
            if found.is_empty() {
                "empty".to_string()
            } else {
                found.join(", ")
            }
        );
    }

    let normalized = normalize_dir_name(
        base,
        &extracted_dir,
        pin.target_name(),
        options.on_existing,
    )?;

    let replaced = match normalized {
        Normalized::Skipped(path) => {
            ui::status(
                quiet,
                "!".yellow(),
                format!("{} appeared during the run, left untouched", path.display()),
            );
            return Ok(FetchReport::Skipped { path });
        }
        Normalized::Renamed(_) => false,
        Normalized::Replaced(_) => true,
    };

    ui::status(
        quiet,
        "✓".green(),
        format!(
            "{} v{} ready at {} ({} files)",
            pin.name,
            pin.version,
            target.display(),
            extraction.files
        ),
    );

    Ok(FetchReport::Fetched {
        path: target,
        archive,
        bytes: bytes.len(),
        replaced,
    })
}
