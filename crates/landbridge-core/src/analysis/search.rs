//! Attribute search over country records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::country::CountryRecord;

/// Search criteria. Every criterion is optional and all present ones must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Inclusive lower population bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_population: Option<i64>,
    /// Inclusive upper population bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_population: Option<i64>,
    /// Language names; a country matches if it speaks at least one of them.
    /// An empty list matches no country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// Exact (case-sensitive) region name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl SearchFilter {
    /// Returns `true` if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns `true` if `record` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &CountryRecord) -> bool {
        let population = i128::from(record.population());
        if self
            .min_population
            .is_some_and(|min| population < i128::from(min))
        {
            return false;
        }
        if self
            .max_population
            .is_some_and(|max| population > i128::from(max))
        {
            return false;
        }
        if let Some(ref wanted) = self.languages {
            if !record
                .language_names()
                .any(|lang| wanted.iter().any(|w| w == lang))
            {
                return false;
            }
        }
        if let Some(ref region) = self.region {
            if record.region() != region {
                return false;
            }
        }
        true
    }
}

/// Compact country description returned by [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    /// Common name.
    pub name: String,
    /// Population.
    pub population: u64,
    /// Distinct language names, sorted.
    pub languages: Vec<String>,
    /// Region.
    pub region: String,
}

impl From<&CountryRecord> for CountrySummary {
    fn from(record: &CountryRecord) -> Self {
        let languages: BTreeSet<&str> = record.language_names().collect();
        Self {
            name: record.common_name().to_string(),
            population: record.population(),
            languages: languages.into_iter().map(str::to_string).collect(),
            region: record.region().to_string(),
        }
    }
}

/// Returns a summary of every record matching `filter`, in input order.
#[must_use]
pub fn search(records: &[CountryRecord], filter: &SearchFilter) -> Vec<CountrySummary> {
    let results: Vec<CountrySummary> = records
        .iter()
        .filter(|r| filter.matches(r))
        .map(CountrySummary::from)
        .collect();
    tracing::debug!(
        scanned = records.len(),
        matched = results.len(),
        "Country search completed"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new("ARG")
                .with_name("Argentina")
                .with_population(45_376_763)
                .with_languages([("grn", "Guaraní"), ("spa", "Spanish")])
                .with_region("Americas"),
            CountryRecord::new("ESP")
                .with_name("Spain")
                .with_population(47_351_567)
                .with_languages([("spa", "Spanish")])
                .with_region("Europe"),
            CountryRecord::new("AND")
                .with_name("Andorra")
                .with_population(77_265)
                .with_languages([("cat", "Catalan")])
                .with_region("Europe"),
            CountryRecord::new("BRA")
                .with_name("Brazil")
                .with_population(212_559_409)
                .with_languages([("por", "Portuguese")])
                .with_region("Americas"),
        ]
    }

    fn names(results: &[CountrySummary]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = SearchFilter::default();
        assert!(filter.is_empty());
        assert_eq!(search(&fixtures(), &filter).len(), 4);
    }

    #[test]
    fn test_population_bounds_are_inclusive() {
        let filter = SearchFilter {
            min_population: Some(77_265),
            max_population: Some(47_351_567),
            ..SearchFilter::default()
        };
        assert_eq!(
            names(&search(&fixtures(), &filter)),
            vec!["Argentina", "Spain", "Andorra"]
        );
    }

    #[test]
    fn test_negative_bounds() {
        let below_zero = SearchFilter {
            min_population: Some(-1),
            ..SearchFilter::default()
        };
        assert_eq!(search(&fixtures(), &below_zero).len(), 4);

        let nothing = SearchFilter {
            max_population: Some(-1),
            ..SearchFilter::default()
        };
        assert!(search(&fixtures(), &nothing).is_empty());
    }

    #[test]
    fn test_language_any_of() {
        let filter = SearchFilter {
            languages: Some(vec!["Catalan".into(), "Portuguese".into()]),
            ..SearchFilter::default()
        };
        assert_eq!(names(&search(&fixtures(), &filter)), vec!["Andorra", "Brazil"]);
    }

    #[test]
    fn test_empty_language_list_matches_nothing() {
        let filter = SearchFilter {
            languages: Some(vec![]),
            ..SearchFilter::default()
        };
        assert!(search(&fixtures(), &filter).is_empty());
    }

    #[test]
    fn test_region_is_exact() {
        let filter = SearchFilter {
            region: Some("europe".into()),
            ..SearchFilter::default()
        };
        assert!(search(&fixtures(), &filter).is_empty());
    }

    #[test]
    fn test_criteria_are_combined() {
        let filter = SearchFilter {
            min_population: Some(1_000_000),
            languages: Some(vec!["Spanish".into()]),
            region: Some("Europe".into()),
            ..SearchFilter::default()
        };
        assert_eq!(names(&search(&fixtures(), &filter)), vec!["Spain"]);
    }

    #[test]
    fn test_summary_languages_sorted() {
        let results = search(&fixtures(), &SearchFilter::default());
        assert_eq!(results[0].languages, vec!["Guaraní", "Spanish"]);
        assert_eq!(results[0].region, "Americas");
    }

    #[test]
    fn test_filter_deserializes_partial_body() {
        let filter: SearchFilter =
            serde_json::from_str(r#"{"min_population": 100, "languages": null}"#).unwrap();
        assert_eq!(filter.min_population, Some(100));
        assert_eq!(filter.languages, None);
        assert!(!filter.is_empty());
    }
}
