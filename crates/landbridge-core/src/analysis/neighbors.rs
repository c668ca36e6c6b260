//! Neighbor analysis for a single country.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::country::CountryRecord;

/// Summary of one bordering country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborInfo {
    /// Common name.
    pub name: String,
    /// First listed capital, if any.
    pub capital: Option<String>,
    /// Population.
    pub population: u64,
}

/// Aggregate view of a country's neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborReport {
    /// One entry per neighbor, in the order given.
    pub neighbors: Vec<NeighborInfo>,
    /// Sum of all neighbor populations.
    pub total_population_neighbors: u64,
    /// Common names of neighbors sharing at least one language with the country.
    pub shared_language_neighbors: Vec<String>,
}

/// Analyzes `neighbors` relative to `country`.
///
/// Languages are compared by name, so "French" in one record matches
/// "French" in another regardless of the language code used.
#[must_use]
pub fn analyze_neighbors(country: &CountryRecord, neighbors: &[CountryRecord]) -> NeighborReport {
    let languages: HashSet<&str> = country.language_names().collect();
    let mut report = NeighborReport::default();

    for neighbor in neighbors {
        report.neighbors.push(NeighborInfo {
            name: neighbor.common_name().to_string(),
            capital: neighbor.first_capital().map(str::to_string),
            population: neighbor.population(),
        });
        report.total_population_neighbors = report
            .total_population_neighbors
            .saturating_add(neighbor.population());

        if neighbor.language_names().any(|lang| languages.contains(lang)) {
            report
                .shared_language_neighbors
                .push(neighbor.common_name().to_string());
        }
    }

    report
}
