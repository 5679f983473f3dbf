//! # depfetch - pinned library fetcher
//!
//! Downloads the nlohmann/json v3.12.0 source archive, extracts it and
//! stages it under a version-independent `json/` directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch into the current directory
//! depfetch
//!
//! # Fetch into another directory, replacing an older checkout
//! depfetch --dir third_party --on-existing overwrite
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - The library pin and run options
//! - [`deps`] - Download, extraction and renaming
//! - [`ui`] - Progress bars and status lines

/// Library pin and fetch options.
pub mod config;

/// Dependency download and staging.
pub mod deps;

/// Terminal progress output.
pub mod ui;
