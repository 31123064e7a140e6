//! Homebrew JSON API client.
//!
//! Fetches the four documents a statistics snapshot is built from: the full
//! formula and cask listings, plus the 90-day install-on-request analytics
//! for each kind. All four requests are issued before any response is
//! awaited; a single failed endpoint fails the whole refresh so a partial
//! snapshot is never built.

use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

const HOMEBREW_API_BASE: &str = "https://formulae.brew.sh/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Formula metadata from `formula.json`, reduced to the fields search needs.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFormula {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Cask metadata from `cask.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCask {
    pub token: String,
    #[serde(default)]
    pub full_token: String,
    #[serde(default)]
    pub desc: Option<String>,
}

/// One row of `analytics/install-on-request/90d.json`. Counts arrive as
/// grouped decimal strings such as `"1,234,567"`.
#[derive(Debug, Clone, Deserialize)]
pub struct FormulaInstallRow {
    pub formula: String,
    pub count: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormulaAnalytics {
    #[serde(default)]
    pub items: Vec<FormulaInstallRow>,
}

/// One row of `analytics/cask-install/homebrew-cask/90d.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CaskInstallRow {
    pub cask: String,
    pub count: String,
}

/// Cask analytics nest their rows under a grouping key whose identity is
/// irrelevant here. A `BTreeMap` keeps flattening order deterministic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaskAnalytics {
    #[serde(default)]
    pub formulae: BTreeMap<String, Vec<CaskInstallRow>>,
}

/// The four raw documents a snapshot is merged from.
#[derive(Debug, Clone)]
pub struct RawStatistics {
    pub formulas: Vec<RawFormula>,
    pub casks: Vec<RawCask>,
    pub formula_stats: FormulaAnalytics,
    pub cask_stats: CaskAnalytics,
}

/// Homebrew API client.
#[derive(Clone)]
pub struct BrewApi {
    client: reqwest::Client,
    base_url: String,
}

impl BrewApi {
    pub fn new() -> Result<Self> {
        Self::with_base_url(HOMEBREW_API_BASE)
    }

    /// Client against an alternate API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("brewfind/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(value)
    }

    /// Fetch all four source documents concurrently.
    ///
    /// The first error aborts the refresh; completion order of the remaining
    /// requests never affects the merged result.
    pub async fn fetch_all(&self) -> Result<RawStatistics> {
        let (formulas, casks, formula_stats, cask_stats) = tokio::try_join!(
            self.get_json::<Vec<RawFormula>>("formula.json"),
            self.get_json::<Vec<RawCask>>("cask.json"),
            self.get_json::<FormulaAnalytics>("analytics/install-on-request/90d.json"),
            self.get_json::<CaskAnalytics>("analytics/cask-install/homebrew-cask/90d.json"),
        )?;

        Ok(RawStatistics {
            formulas,
            casks,
            formula_stats,
            cask_stats,
        })
    }
}
