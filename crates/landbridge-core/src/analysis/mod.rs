//! Linear scans and aggregations over country records.
//!
//! - `neighbors`: population and shared languages of a country's neighbors
//! - `region`: totals, mean and top-5 ranking for a set of countries
//! - `search`: attribute filter (population range, languages, region)

mod neighbors;
mod region;
mod search;

pub use neighbors::{analyze_neighbors, NeighborInfo, NeighborReport};
pub use region::{region_stats, PopulationEntry, RegionStats, TOP_COUNTRIES};
pub use search::{search, CountrySummary, SearchFilter};
