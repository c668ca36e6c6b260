//! Country-data providers.
//!
//! The HTTP handlers never talk to the network directly: they go through a
//! [`CountryProvider`]. Two implementations ship with the server:
//!
//! - [`RestCountriesProvider`]: REST Countries v3.1 compatible HTTP API
//! - [`SnapshotProvider`]: records loaded once from a local JSON file

mod rest;
mod snapshot;

use async_trait::async_trait;
use futures::future::join_all;
use landbridge_core::CountryRecord;
use std::time::Duration;
use tracing::warn;

use crate::error::Result;

pub use rest::RestCountriesProvider;
pub use snapshot::SnapshotProvider;

/// Default upstream base URL.
pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Projection used to build the border graph.
pub const ROUTE_FIELDS: &[&str] = &["borders", "cca3"];
/// Projection used by attribute search.
pub const SEARCH_FIELDS: &[&str] = &["name", "population", "languages", "region"];

/// Trait for country-data sources.
///
/// Implementations do not cache between calls: every call reflects the
/// source's current data.
#[async_trait]
pub trait CountryProvider: Send + Sync {
    /// Short name used in logs.
    fn source_type(&self) -> &'static str;

    /// Fetches one country by code.
    async fn country(&self, code: &str) -> Result<CountryRecord>;

    /// Fetches every country, restricted to `fields` when the source supports it.
    async fn all_countries(&self, fields: &[&str]) -> Result<Vec<CountryRecord>>;

    /// Fetches every country of a region.
    async fn region(&self, region: &str) -> Result<Vec<CountryRecord>>;

    /// Fetches several countries concurrently, keeping the order of `codes`.
    ///
    /// Codes that fail to load are logged and skipped.
    async fn countries_by_codes(&self, codes: &[String]) -> Vec<CountryRecord> {
        let results = join_all(codes.iter().map(|code| self.country(code))).await;
        codes
            .iter()
            .zip(results)
            .filter_map(|(code, result)| match result {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(code = %code, error = %e, "Skipping country that failed to load");
                    None
                }
            })
            .collect()
    }
}

/// Configuration for [`RestCountriesProvider`].
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL, e.g. `https://restcountries.com/v3.1`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Creates a config for the given base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the per-request timeout (builder pattern).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_builder() {
        let config = ProviderConfig::new("http://localhost:9000").with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_countries_by_codes_skips_failures() {
        let provider = SnapshotProvider::from_records(vec![
            CountryRecord::new("FRA"),
            CountryRecord::new("ESP"),
        ]);
        let codes = vec!["ESP".to_string(), "XXX".to_string(), "FRA".to_string()];
        let records = provider.countries_by_codes(&codes).await;
        let ids: Vec<_> = records.iter().filter_map(CountryRecord::id).collect();
        assert_eq!(ids, vec!["ESP", "FRA"]);
    }
}
