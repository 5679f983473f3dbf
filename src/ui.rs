//! Terminal progress and status output.
//!
//! Every user-visible line goes through here so that `--quiet` can silence
//! the whole run in one place.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Byte-counting bar for downloads. `total` of 0 means the length is unknown.
pub fn download_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.blue} [{elapsed_precise}] [{bar:40.green/black}] {bytes}/{total_bytes} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_chars("◐◓◑◒")
        .progress_chars("━━╸"));
    pb
}

/// Entry-counting bar for archive extraction.
pub fn entries_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} entries")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Prints a status line unless running quietly.
pub fn status(quiet: bool, glyph: ColoredString, message: impl AsRef<str>) {
    if !quiet {
        println!("{} {}", glyph, message.as_ref());
    }
}
