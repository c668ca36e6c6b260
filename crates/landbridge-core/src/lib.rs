//! # `Landbridge` Core
//!
//! Geographic-relationship queries over country records.
//!
//! The crate turns a flat list of [`CountryRecord`]s (as returned by a
//! REST Countries style provider) into a border graph and answers questions
//! about it:
//!
//! - **Land routes**: shortest border-crossing path between two countries
//! - **Neighbor analysis**: population and shared languages of bordering countries
//! - **Regional statistics**: totals, mean population, top 5 most populous
//! - **Attribute search**: population range, language and region filters
//!
//! Every operation is a pure, synchronous function over in-memory data.
//! Nothing here performs I/O or keeps state between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use landbridge_core::{build_graph, shortest_path, CountryRecord, Route};
//!
//! let records = vec![
//!     CountryRecord::new("FRA").with_borders(["ESP", "DEU"]),
//!     CountryRecord::new("ESP").with_borders(["FRA", "PRT"]),
//!     CountryRecord::new("PRT").with_borders(["ESP"]),
//!     CountryRecord::new("DEU").with_borders(["FRA"]),
//! ];
//!
//! let graph = build_graph(&records);
//! let route = shortest_path(&graph, "PRT", "DEU");
//!
//! assert_eq!(route.path().unwrap(), ["PRT", "ESP", "FRA", "DEU"]);
//! assert_eq!(route.hop_count(), Some(3));
//! assert_eq!(shortest_path(&graph, "PRT", "JPN"), Route::NotFound);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::doc_markdown))]

pub mod analysis;
pub mod country;
pub mod graph;

pub use analysis::{
    analyze_neighbors, region_stats, search, CountrySummary, NeighborInfo, NeighborReport,
    PopulationEntry, RegionStats, SearchFilter,
};
pub use country::{CountryName, CountryRecord};
pub use graph::{build_graph, shortest_path, Adjacency, BorderGraph, Route};
