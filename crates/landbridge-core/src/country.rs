//! Typed country record as delivered by a REST Countries style provider.
//!
//! The provider's payload is only loosely shaped: fields go missing when a
//! `fields=` projection is requested, `borders` is absent for island nations,
//! and single-country lookups sometimes wrap the object in an array. All of
//! that is absorbed here, once, so that graph construction and the analysis
//! functions work on plain Rust values.
//!
//! # Example
//!
//! ```rust
//! use landbridge_core::CountryRecord;
//!
//! let json = r#"{"cca3":"CHE","borders":["AUT","FRA","ITA","LIE","DEU"],
//!                "name":{"common":"Switzerland"},"population":8654622}"#;
//! let record: CountryRecord = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(record.id(), Some("CHE"));
//! assert_eq!(record.borders().len(), 5);
//! assert_eq!(record.common_name(), "Switzerland");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common (short) name, e.g. "Germany".
    #[serde(default)]
    pub common: String,
    /// Official name, e.g. "Federal Republic of Germany".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub official: String,
}

/// A single country as returned by the country-data provider.
///
/// Only `cca3` identifies a record. A record without it can still be
/// aggregated (region statistics, search) but never enters the border graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(
        default,
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    cca3: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    borders: Vec<String>,
    #[serde(default, deserialize_with = "lenient::name")]
    name: CountryName,
    #[serde(default, deserialize_with = "lenient::string_list")]
    capital: Vec<String>,
    #[serde(default, deserialize_with = "lenient::population")]
    population: u64,
    #[serde(default, deserialize_with = "lenient::languages")]
    languages: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient::string")]
    region: String,
}

impl CountryRecord {
    /// Creates a record with the given identifier and no other data.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            cca3: Some(id.into()),
            ..Self::default()
        }
    }

    /// Sets the bordering country identifiers (builder pattern).
    #[must_use]
    pub fn with_borders<I, S>(mut self, borders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.borders = borders.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the common name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, common: impl Into<String>) -> Self {
        self.name.common = common.into();
        self
    }

    /// Sets the capital cities (builder pattern).
    #[must_use]
    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = vec![capital.into()];
        self
    }

    /// Sets the population (builder pattern).
    #[must_use]
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Sets the spoken languages as `(code, name)` pairs (builder pattern).
    #[must_use]
    pub fn with_languages<I, K, V>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.languages = languages
            .into_iter()
            .map(|(code, name)| (code.into(), name.into()))
            .collect();
        self
    }

    /// Sets the region (builder pattern).
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Returns the ISO 3166-1 alpha-3 identifier, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.cca3.as_deref()
    }

    /// Returns the identifiers of directly adjoining countries, in provider order.
    #[must_use]
    pub fn borders(&self) -> &[String] {
        &self.borders
    }

    /// Returns the full name block.
    #[must_use]
    pub fn name(&self) -> &CountryName {
        &self.name
    }

    /// Returns the common name, falling back to the identifier.
    #[must_use]
    pub fn common_name(&self) -> &str {
        if self.name.common.is_empty() {
            self.id().unwrap_or_default()
        } else {
            &self.name.common
        }
    }

    /// Returns the first listed capital, if any.
    #[must_use]
    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Returns the population (0 when unknown).
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Returns the language names, ordered by language code.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.values().map(String::as_str)
    }

    /// Returns the region (empty when unknown).
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Field deserializers that degrade malformed values to their defaults.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::collections::BTreeMap;

    use super::CountryName;

    pub(super) fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub(super) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            _ => String::new(),
        })
    }

    pub(super) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub(super) fn name<'de, D>(deserializer: D) -> Result<CountryName, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(map) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };
                CountryName {
                    common: field("common"),
                    official: field("official"),
                }
            }
            Value::String(common) => CountryName {
                common,
                official: String::new(),
            },
            _ => CountryName::default(),
        })
    }

    pub(super) fn population<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Value::deserialize(deserializer)?
            .as_u64()
            .unwrap_or_default())
    }

    pub(super) fn languages<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(code, name)| match name {
                    Value::String(name) => Some((code, name)),
                    _ => None,
                })
                .collect(),
            _ => BTreeMap::new(),
        })
    }
}
