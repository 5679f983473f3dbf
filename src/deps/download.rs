//! Archive download and persistence.

use crate::ui;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("depfetch/", env!("CARGO_PKG_VERSION"));

/// Upper bound on the buffer reserved from a `Content-Length` header.
const MAX_PREALLOC: u64 = 64 << 20;

/// Downloads `url` and returns the whole response body.
///
/// Redirects are followed. Any transport failure or non-2xx status is an
/// error. No timeout is set, so a stalled server blocks the caller.
pub fn fetch_archive(url: &str, quiet: bool) -> Result<Vec<u8>> {
    let response = ureq::get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .with_context(|| format!("Failed to download {}", url))?;

    let total_size = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    let pb = ui::download_bar(total_size, quiet);
    let mut bytes = Vec::with_capacity(total_size.min(MAX_PREALLOC) as usize);
    let mut reader = response.into_body().into_reader();
    let mut buffer = [0; 8192];

    loop {
        let n = reader
            .read(&mut buffer)
            .with_context(|| format!("Failed to read response body from {}", url))?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&buffer[..n]);
        pb.inc(n as u64);
    }

    pb.finish_and_clear();
    Ok(bytes)
}

/// Writes `bytes` to `<staging>/<archive_name>`, replacing any previous file.
pub fn persist_archive(staging: &Path, archive_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = staging.join(archive_name);
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
