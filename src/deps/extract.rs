//! Zip extraction.

use crate::ui;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::{Component, Path};

/// What an extraction wrote to disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub files: usize,
    pub dirs: usize,
    /// Entries whose path would land outside the destination.
    pub skipped: usize,
    /// First path component of every extracted entry.
    pub top_level: BTreeSet<String>,
}

/// Extracts every entry of the zip at `archive_path` below `dest`,
/// preserving the directory layout stored in the archive.
pub fn extract_archive(archive_path: &Path, dest: &Path, quiet: bool) -> Result<Extraction> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open {}", archive_path.display()))?;
    let mut archive = zip::ZipArchive::new(file).with_context(|| {
        format!(
            "Failed to read archive {} (corrupted or incomplete download?)",
            archive_path.display()
        )
    })?;

    let pb = ui::entries_bar(archive.len() as u64, quiet);
    let mut report = Extraction::default();

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read entry {} of {}", i, archive_path.display()))?;
        pb.inc(1);

        let relative = match entry.enclosed_name() {
            Some(path) => path,
            None => {
                report.skipped += 1;
                continue;
            }
        };

        if let Some(Component::Normal(first)) = relative.components().next() {
            report
                .top_level
                .insert(first.to_string_lossy().into_owned());
        }

        let outpath = dest.join(&relative);
        if entry.is_dir() {
            fs::create_dir_all(&outpath)
                .with_context(|| format!("Failed to create {}", outpath.display()))?;
            report.dirs += 1;
        } else {
            if let Some(p) = outpath.parent()
                && !p.exists()
            {
                fs::create_dir_all(p)
                    .with_context(|| format!("Failed to create {}", p.display()))?;
            }
            let mut outfile = File::create(&outpath)
                .with_context(|| format!("Failed to create {}", outpath.display()))?;
            std::io::copy(&mut entry, &mut outfile)
                .with_context(|| format!("Failed to extract {}", outpath.display()))?;
            report.files += 1;
        }
    }

    pb.finish_and_clear();
    Ok(report)
}
