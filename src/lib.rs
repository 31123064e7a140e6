//! brewfind - search Homebrew formulae and casks, ranked by 90-day install
//! counts.
//!
//! The library surface exists so the snapshot, cache, and search logic can be
//! exercised by integration tests; the `brewfind` binary is the intended
//! interface.

pub mod api;
pub mod cache;
pub mod colors;
pub mod error;
pub mod output;
pub mod search;
pub mod snapshot;

pub use api::BrewApi;
pub use error::{BrewFindError, Result};
pub use search::{KindFilter, SearchResult, search};
pub use snapshot::{PackageKind, PackageRecord, Snapshot};
