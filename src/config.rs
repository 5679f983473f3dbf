//! Fetch configuration.
//!
//! The library pin is fixed at compile time; the only runtime knobs are the
//! base directory, what to do when the target directory is already present,
//! and whether to print progress.

use std::borrow::Cow;
use std::path::PathBuf;

/// Name of the staging directory created under the base directory.
pub const STAGING_DIR: &str = "temp";

/// A library archive pinned to one exact tagged release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPin {
    pub name: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub url: Cow<'static, str>,
    /// File name of the archive inside the staging directory.
    pub archive_name: Cow<'static, str>,
}

/// nlohmann/json, tag v3.12.0.
pub const NLOHMANN_JSON: LibraryPin = LibraryPin {
    name: Cow::Borrowed("json"),
    version: Cow::Borrowed("3.12.0"),
    url: Cow::Borrowed("https://github.com/nlohmann/json/archive/refs/tags/v3.12.0.zip"),
    archive_name: Cow::Borrowed("json-v3.12.0.zip"),
};

impl LibraryPin {
    /// Top-level directory recorded inside the archive (`<name>-<version>`).
    pub fn extracted_dir_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    /// Version-independent directory the extracted tree is renamed to.
    pub fn target_name(&self) -> &str {
        &self.name
    }
}

/// What to do when the target directory already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OnExisting {
    /// Refuse to rename and report an error.
    #[default]
    Fail,
    /// Remove the existing target, then rename.
    Overwrite,
    /// Leave the existing target alone.
    Skip,
}

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub base_dir: PathBuf,
    pub on_existing: OnExisting,
    pub quiet: bool,
}

impl FetchOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, on_existing: OnExisting) -> Self {
        self.on_existing = on_existing;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            on_existing: OnExisting::Fail,
            quiet: false,
        }
    }
}
