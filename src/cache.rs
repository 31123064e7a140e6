//! On-disk statistics cache.
//!
//! One snapshot lives at a fixed path under the user's cache directory and is
//! always replaced whole. Freshness is judged from the snapshot's own
//! `updated_at` stamp, not file mtime, since the stamp records when the
//! source documents were actually fetched.

use crate::api::BrewApi;
use crate::error::Result;
use crate::snapshot::{Snapshot, merge};
use std::path::{Path, PathBuf};

/// Snapshots older than a week are refetched.
pub const CACHE_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Get the cache directory (~/.cache/brewfind/ or equivalent)
pub fn cache_dir() -> PathBuf {
    if let Some(cache_home) = std::env::var_os("XDG_CACHE_HOME") {
        PathBuf::from(cache_home).join("brewfind")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".cache/brewfind")
    } else {
        PathBuf::from(".cache/brewfind")
    }
}

/// Default location of the snapshot file.
pub fn statistics_path() -> PathBuf {
    cache_dir().join("statistics.json")
}

/// Load the cached snapshot, treating a missing or corrupt file as a miss.
pub fn load(path: &Path) -> Option<Snapshot> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// A snapshot is fresh while strictly less than the TTL has elapsed.
pub fn is_fresh(snapshot: &Snapshot, now: i64) -> bool {
    now - snapshot.updated_at < CACHE_TTL_SECS
}

/// Serialize the snapshot beside its final path, then rename into place so a
/// crash mid-write cannot leave a truncated file where a valid cache was.
pub fn persist(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(snapshot)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Return the cached snapshot if present and fresh, otherwise fetch the four
/// source documents, merge, persist, and return the result.
///
/// `force` skips the freshness check entirely. Nothing is persisted when any
/// fetch fails.
pub async fn load_or_refresh(api: &BrewApi, path: &Path, force: bool) -> Result<Snapshot> {
    let now = chrono::Utc::now().timestamp();

    if !force {
        if let Some(snapshot) = load(path) {
            if is_fresh(&snapshot, now) {
                tracing::debug!("using cached statistics from {}", path.display());
                return Ok(snapshot);
            }
        }
    }

    let fetched = api.fetch_all().await?;

    let snapshot = merge(fetched, now);
    persist(path, &snapshot)?;

    Ok(snapshot)
}
