//! Regional statistics.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::country::CountryRecord;

/// Number of countries listed in [`RegionStats::most_populous`].
pub const TOP_COUNTRIES: usize = 5;

/// Name and population of one ranked country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationEntry {
    /// Common name.
    pub name: String,
    /// Population.
    pub population: u64,
}

/// Aggregate statistics for a set of countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    /// Number of countries.
    pub total_countries: usize,
    /// Sum of populations.
    pub total_population: u64,
    /// Mean population, rounded to 2 decimals.
    pub mean_population: f64,
    /// Number of distinct language names.
    pub unique_languages: usize,
    /// Up to five most populous countries, descending.
    #[serde(rename = "most_populous_country")]
    pub most_populous: Vec<PopulationEntry>,
}

/// Computes statistics over `records`, or `None` when there are none.
///
/// Countries with equal population keep their input order in the ranking.
#[must_use]
pub fn region_stats(records: &[CountryRecord]) -> Option<RegionStats> {
    if records.is_empty() {
        return None;
    }

    let total_population = records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.population()));
    let unique_languages = records
        .iter()
        .flat_map(CountryRecord::language_names)
        .collect::<HashSet<_>>()
        .len();

    let mut ranked: Vec<&CountryRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.population().cmp(&a.population()));
    let most_populous = ranked
        .into_iter()
        .take(TOP_COUNTRIES)
        .map(|r| PopulationEntry {
            name: r.common_name().to_string(),
            population: r.population(),
        })
        .collect();

    Some(RegionStats {
        total_countries: records.len(),
        total_population,
        mean_population: rounded_mean(total_population, records.len()),
        unique_languages,
        most_populous,
    })
}

// Reason: populations and country counts are far below 2^52, so the f64
// conversion is exact.
#[allow(clippy::cast_precision_loss)]
fn rounded_mean(total: u64, count: usize) -> f64 {
    let mean = total as f64 / count as f64;
    (mean * 100.0).round() / 100.0
}
