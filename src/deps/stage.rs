//! Staging directory and final directory naming.

use crate::config::{OnExisting, STAGING_DIR};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of [`normalize_dir_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// `from` was renamed to the returned path.
    Renamed(PathBuf),
    /// The target already existed and was replaced.
    Replaced(PathBuf),
    /// The target already existed and nothing was touched.
    Skipped(PathBuf),
}

impl Normalized {
    pub fn path(&self) -> &Path {
        match self {
            Normalized::Renamed(p) | Normalized::Replaced(p) | Normalized::Skipped(p) => p,
        }
    }
}

/// Creates `<base>/temp` if it is not already there.
pub fn ensure_staging_dir(base: &Path) -> Result<PathBuf> {
    let staging = base.join(STAGING_DIR);
    fs::create_dir_all(&staging)
        .with_context(|| format!("Failed to create staging directory {}", staging.display()))?;
    Ok(staging)
}

/// Renames `<base>/<from>` to `<base>/<to>`.
///
/// An occupied target is checked for up front rather than left to the
/// platform's rename semantics, which differ for empty directories.
pub fn normalize_dir_name(
    base: &Path,
    from: &str,
    to: &str,
    policy: OnExisting,
) -> Result<Normalized> {
    let source = base.join(from);
    let target = base.join(to);

    if !source.is_dir() {
        bail!(
            "Expected extracted directory {} was not found (archive layout: {})",
            source.display(),
            list_entries(base)
        );
    }

    if !is_occupied(&target) {
        rename(&source, &target)?;
        return Ok(Normalized::Renamed(target));
    }

    match policy {
        OnExisting::Fail => bail!(
            "Target {} already exists; {} was left in place",
            target.display(),
            source.display()
        ),
        OnExisting::Skip => Ok(Normalized::Skipped(target)),
        OnExisting::Overwrite => {
            remove_entry(&target)?;
            rename(&source, &target)?;
            Ok(Normalized::Replaced(target))
        }
    }
}

/// True when anything sits at `path`, including a dangling symlink.
pub(crate) fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn rename(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            source.display(),
            target.display()
        )
    })
}

fn remove_entry(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path)?;
    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.with_context(|| format!("Failed to remove existing {}", path.display()))
}

fn list_entries(dir: &Path) -> String {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => return "unreadable".to_string(),
    };
    names.sort();
    if names.is_empty() {
        "empty".to_string()
    } else {
        names.join(", ")
    }
}
