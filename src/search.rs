//! Ranked substring search over a statistics snapshot.

use crate::error::{BrewFindError, Result};
use crate::snapshot::{PackageKind, PackageRecord, Snapshot};
use std::collections::HashMap;

/// Which package indices a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    Both,
    FormulaOnly,
    CaskOnly,
}

impl KindFilter {
    /// Map the CLI's two exclusive flags onto a filter.
    ///
    /// clap already rejects the conflicting pair at parse time; this guards
    /// callers that reach the library directly.
    pub fn from_flags(formula_only: bool, cask_only: bool) -> Result<Self> {
        match (formula_only, cask_only) {
            (true, true) => Err(BrewFindError::ConflictingFilters),
            (true, false) => Ok(Self::FormulaOnly),
            (false, true) => Ok(Self::CaskOnly),
            (false, false) => Ok(Self::Both),
        }
    }
}

/// One ranked search hit. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub kind: PackageKind,
    pub count: u64,
}

fn collect_matches(
    records: &HashMap<String, PackageRecord>,
    popularity: &HashMap<String, u64>,
    kind: PackageKind,
    term: &str,
    out: &mut Vec<SearchResult>,
) {
    for (name, record) in records {
        let matched = name.to_lowercase().contains(term)
            || record.description.to_lowercase().contains(term);
        if matched {
            out.push(SearchResult {
                name: record.name.clone(),
                full_name: record.full_name.clone(),
                description: record.description.clone(),
                kind,
                count: popularity.get(name).copied().unwrap_or(0),
            });
        }
    }
}

/// Search the snapshot for `term`, ranked by 90-day install count descending.
///
/// The term is lower-cased here, so callers pass it through as typed. A
/// record matches when its lower-cased name or description contains the
/// term. Equal counts order by name so identical inputs always render
/// identically.
pub fn search(
    snapshot: &Snapshot,
    term: &str,
    limit: usize,
    filter: KindFilter,
) -> Vec<SearchResult> {
    let term = term.to_lowercase();
    let mut results = Vec::new();

    if filter != KindFilter::CaskOnly {
        collect_matches(
            &snapshot.formulas,
            &snapshot.stats_formulas,
            PackageKind::Formula,
            &term,
            &mut results,
        );
    }
    if filter != KindFilter::FormulaOnly {
        collect_matches(
            &snapshot.casks,
            &snapshot.stats_casks,
            PackageKind::Cask,
            &term,
            &mut results,
        );
    }

    results.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, description: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            full_name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            updated_at: 1_700_000_000,
            formulas: HashMap::from([
                ("wget".to_string(), record("wget", "Internet file retriever")),
                ("curl".to_string(), record("curl", "Get a file from a URL")),
                ("jq".to_string(), record("jq", "JSON processor")),
            ]),
            casks: HashMap::from([
                ("firefox".to_string(), record("firefox", "Web browser")),
                ("curl-gui".to_string(), record("curl-gui", "")),
            ]),
            stats_formulas: HashMap::from([
                ("wget".to_string(), 1_500_000),
                ("curl".to_string(), 800_000),
            ]),
            stats_casks: HashMap::from([("firefox".to_string(), 400_000)]),
        }
    }

    #[test]
    fn matches_name_or_description() {
        let snapshot = sample_snapshot();

        let by_name = search(&snapshot, "wget", 30, KindFilter::Both);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "wget");

        let by_desc = search(&snapshot, "browser", 30, KindFilter::Both);
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].name, "firefox");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let snapshot = sample_snapshot();

        let results = search(&snapshot, "JSON", 30, KindFilter::Both);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "jq");
    }

    #[test]
    fn every_result_contains_the_term() {
        let snapshot = sample_snapshot();

        for result in search(&snapshot, "curl", 30, KindFilter::Both) {
            let haystack = format!(
                "{} {}",
                result.name.to_lowercase(),
                result.description.to_lowercase()
            );
            assert!(haystack.contains("curl"));
        }
    }

    #[test]
    fn kind_filter_excludes_the_other_index() {
        let snapshot = sample_snapshot();

        let formulas = search(&snapshot, "curl", 30, KindFilter::FormulaOnly);
        assert!(formulas.iter().all(|r| r.kind == PackageKind::Formula));
        assert_eq!(formulas.len(), 1);

        let casks = search(&snapshot, "curl", 30, KindFilter::CaskOnly);
        assert!(casks.iter().all(|r| r.kind == PackageKind::Cask));
        assert_eq!(casks.len(), 1);
    }

    #[test]
    fn missing_popularity_defaults_to_zero() {
        let snapshot = sample_snapshot();

        let results = search(&snapshot, "jq", 30, KindFilter::Both);
        assert_eq!(results[0].count, 0);
    }

    #[test]
    fn results_are_sorted_by_count_descending() {
        let snapshot = sample_snapshot();

        let results = search(&snapshot, "", 30, KindFilter::Both);
        for pair in results.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(results[0].name, "wget");
    }

    #[test]
    fn equal_counts_order_by_name() {
        let snapshot = sample_snapshot();

        // jq and curl-gui both count 0; the empty term matches everything.
        let results = search(&snapshot, "", 30, KindFilter::Both);
        let zeros: Vec<&str> = results
            .iter()
            .filter(|r| r.count == 0)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(zeros, vec!["curl-gui", "jq"]);
    }

    #[test]
    fn limit_truncates_and_zero_yields_nothing() {
        let snapshot = sample_snapshot();

        assert_eq!(search(&snapshot, "", 2, KindFilter::Both).len(), 2);
        assert_eq!(search(&snapshot, "", 100, KindFilter::Both).len(), 5);
        assert!(search(&snapshot, "", 0, KindFilter::Both).is_empty());
    }

    #[test]
    fn from_flags_rejects_conflicting_filters() {
        assert!(KindFilter::from_flags(true, true).is_err());
        assert_eq!(
            KindFilter::from_flags(true, false).unwrap(),
            KindFilter::FormulaOnly
        );
        assert_eq!(
            KindFilter::from_flags(false, true).unwrap(),
            KindFilter::CaskOnly
        );
        assert_eq!(
            KindFilter::from_flags(false, false).unwrap(),
            KindFilter::Both
        );
    }
}
