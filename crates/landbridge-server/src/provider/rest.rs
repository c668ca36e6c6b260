//! REST Countries v3.1 compatible provider.

use async_trait::async_trait;
use landbridge_core::CountryRecord;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::{CountryProvider, ProviderConfig};
use crate::error::{ProviderError, Result};

/// HTTP provider backed by a REST Countries style API.
pub struct RestCountriesProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

/// `/alpha/{code}` answers with a bare object on some deployments and a
/// one-element array on others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<CountryRecord>),
    One(CountryRecord),
}

impl OneOrMany {
    fn into_first(self) -> Option<CountryRecord> {
        match self {
            Self::Many(records) => records.into_iter().next(),
            Self::One(record) => Some(record),
        }
    }
}

impl RestCountriesProvider {
    /// Create a new REST provider.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be built
    /// (e.g. TLS backend initialization failure).
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("landbridge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        info!(
            "Country provider: {} (timeout {:?})",
            config.base_url, config.timeout
        );
        Ok(Self { config, client })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET `url` and decode the JSON body, mapping 404 to `NotFound(what)`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CountryProvider for RestCountriesProvider {
    fn source_type(&self) -> &'static str {
        "restcountries"
    }

    async fn country(&self, code: &str) -> Result<CountryRecord> {
        let what = format!("country '{code}'");
        let payload: OneOrMany = self
            .get_json(&self.url(&format!("/alpha/{code}")), &what)
            .await?;
        payload
            .into_first()
            .ok_or(ProviderError::EmptyResponse(what))
    }

    async fn all_countries(&self, fields: &[&str]) -> Result<Vec<CountryRecord>> {
        let path = if fields.is_empty() {
            "/all".to_string()
        } else {
            format!("/all?fields={}", fields.join(","))
        };
        let records: Vec<CountryRecord> = self.get_json(&self.url(&path), "country list").await?;
        debug!("Fetched {} countries", records.len());
        Ok(records)
    }

    async fn region(&self, region: &str) -> Result<Vec<CountryRecord>> {
        let what = format!("region '{region}'");
        self.get_json(&self.url(&format!("/region/{region}")), &what)
            .await
    }
}
