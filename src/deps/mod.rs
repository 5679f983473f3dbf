//! Dependency fetching.
//!
//! A fetch is four blocking steps run in order:
//!
//! - **Stage**: make sure `<base>/temp` exists
//! - **Download**: GET the pinned archive and save it to `temp/`
//! - **Extract**: unpack every entry into `<base>`
//! - **Normalize**: rename `<name>-<version>` to `<name>`
//!
//! There are no retries and no rollback; an error at any step aborts the
//! fetch and leaves whatever that step already produced.

mod download;
mod extract;
mod fetch;
mod stage;

pub use download::{fetch_archive, persist_archive};
pub use extract::{Extraction, extract_archive};
pub use fetch::{FetchReport, fetch_library};
pub use stage::{Normalized, ensure_staging_dir, normalize_dir_name};
