//! Terminal rendering of ranked search results.

use crate::search::SearchResult;
use crate::snapshot::PackageKind;
use colored::Colorize;

/// Print one line per result: right-aligned count, color-coded name, and
/// description.
///
/// Results arrive sorted by count descending, so the first entry carries the
/// largest count of the whole match set and fixes the column width.
pub fn render(results: &[SearchResult]) {
    let width = results
        .first()
        .map(|r| r.count.to_string().len())
        .unwrap_or(0);

    for result in results {
        let name = match result.kind {
            PackageKind::Formula => result.name.blue(),
            PackageKind::Cask => result.name.green(),
        };
        println!("{:>width$} {} - {}", result.count, name, result.description);
    }
}
