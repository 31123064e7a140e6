//! Statistics snapshot: the merged, cached view of package metadata and
//! popularity counts that searches run against.
//!
//! Normalization happens here, at merge time: a cask's `full_token` becomes
//! `full_name`, and a missing description becomes the empty string, so the
//! search and rendering layers never see source-specific field shapes.

use crate::api::RawStatistics;
use crate::error::{BrewFindError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which index a package came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageKind {
    Formula,
    Cask,
}

/// Normalized metadata for one formula or cask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: String,
}

/// The sole persisted artifact: everything a search needs, in one file.
///
/// Popularity keys and metadata keys need not correspond; a name absent from
/// its popularity index simply counts as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Epoch seconds at which the four source documents were fetched.
    pub updated_at: i64,
    pub formulas: HashMap<String, PackageRecord>,
    pub casks: HashMap<String, PackageRecord>,
    pub stats_formulas: HashMap<String, u64>,
    pub stats_casks: HashMap<String, u64>,
}

/// Parse a human-formatted install count such as `"1,234,567"`.
pub fn parse_count(raw: &str) -> Result<u64> {
    raw.replace(',', "")
        .parse()
        .map_err(|_| BrewFindError::InvalidCount(raw.to_string()))
}

/// Build a snapshot from the four raw API documents.
///
/// `now` is captured once by the caller before the fetch began and stamps the
/// whole snapshot. Malformed count rows are skipped with a warning rather
/// than failing the refresh; one bad analytics row should not block search.
pub fn merge(raw: RawStatistics, now: i64) -> Snapshot {
    let formulas = raw
        .formulas
        .into_iter()
        .map(|f| {
            let record = PackageRecord {
                name: f.name.clone(),
                full_name: f.full_name,
                description: f.desc.unwrap_or_default(),
            };
            (f.name, record)
        })
        .collect();

    let casks = raw
        .casks
        .into_iter()
        .map(|c| {
            let record = PackageRecord {
                name: c.token.clone(),
                full_name: c.full_token,
                description: c.desc.unwrap_or_default(),
            };
            (c.token, record)
        })
        .collect();

    let mut stats_formulas = HashMap::new();
    for row in raw.formula_stats.items {
        match parse_count(&row.count) {
            Ok(count) => {
                stats_formulas.insert(row.formula, count);
            }
            Err(err) => tracing::warn!("skipping formula analytics row: {err}"),
        }
    }

    // Flatten across the outer grouping; later rows overwrite earlier ones
    // when the same cask appears in more than one group.
    let mut stats_casks = HashMap::new();
    for rows in raw.cask_stats.formulae.into_values() {
        for row in rows {
            match parse_count(&row.count) {
                Ok(count) => {
                    stats_casks.insert(row.cask, count);
                }
                Err(err) => tracing::warn!("skipping cask analytics row: {err}"),
            }
        }
    }

    Snapshot {
        updated_at: now,
        formulas,
        casks,
        stats_formulas,
        stats_casks,
    }
}
