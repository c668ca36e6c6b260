//! Provider serving a fixed set of country records.
//!
//! Loaded once from a JSON file in the REST Countries `/all` format, for
//! offline use and tests. Lookups mirror the REST API: codes and regions are
//! matched case-insensitively and an unknown region is `NotFound`.

use async_trait::async_trait;
use landbridge_core::CountryRecord;
use std::path::Path;
use tracing::info;

use super::CountryProvider;
use crate::error::{ProviderError, Result};

/// In-memory country source.
#[derive(Debug, Clone, Default)]
pub struct SnapshotProvider {
    countries: Vec<CountryRecord>,
}

impl SnapshotProvider {
    /// Creates a provider serving `countries`.
    #[must_use]
    pub fn from_records(countries: Vec<CountryRecord>) -> Self {
        Self { countries }
    }

    /// Loads a JSON array of country objects from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Io` if the file cannot be read and
    /// `ProviderError::Decode` if it is not a JSON array of objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read(path)?;
        let countries: Vec<CountryRecord> = serde_json::from_slice(&raw)?;
        info!(
            "Loaded {} countries from snapshot {}",
            countries.len(),
            path.display()
        );
        Ok(Self { countries })
    }

    /// Returns the number of records served.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns `true` if the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[async_trait]
impl CountryProvider for SnapshotProvider {
    fn source_type(&self) -> &'static str {
        "snapshot"
    }

    async fn country(&self, code: &str) -> Result<CountryRecord> {
        self.countries
            .iter()
            .find(|c| c.id().is_some_and(|id| id.eq_ignore_ascii_case(code)))
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("country '{code}'")))
    }

    async fn all_countries(&self, _fields: &[&str]) -> Result<Vec<CountryRecord>> {
        Ok(self.countries.clone())
    }

    async fn region(&self, region: &str) -> Result<Vec<CountryRecord>> {
        let matching: Vec<CountryRecord> = self
            .countries
            .iter()
            .filter(|c| c.region().eq_ignore_ascii_case(region))
            .cloned()
            .collect();
        if matching.is_empty() {
            return Err(ProviderError::NotFound(format!("region '{region}'")));
        }
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn provider() -> SnapshotProvider {
        SnapshotProvider::from_records(vec![
            CountryRecord::new("FRA").with_region("Europe"),
            CountryRecord::new("ESP").with_region("Europe"),
            CountryRecord::new("JPN").with_region("Asia"),
        ])
    }

    #[tokio::test]
    async fn test_country_lookup_is_case_insensitive() {
        let record = provider().country("fra").await.unwrap();
        assert_eq!(record.id(), Some("FRA"));
    }

    #[tokio::test]
    async fn test_unknown_country_not_found() {
        let err = provider().country("XYZ").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_region_filter() {
        let records = provider().region("europe").await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(matches!(
            provider().region("Atlantis").await,
            Err(ProviderError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"cca3":"CHE","borders":["FRA"]}},{{"cca3":"FRA","borders":["CHE"]}}]"#
        )
        .unwrap();

        let provider = SnapshotProvider::from_json_file(file.path()).unwrap();
        assert_eq!(provider.len(), 2);
        assert!(!provider.is_empty());
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = SnapshotProvider::from_json_file("/nonexistent/countries.json").unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));
    }

    #[test]
    fn test_from_json_file_not_an_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cca3":"CHE"}}"#).unwrap();
        let err = SnapshotProvider::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
