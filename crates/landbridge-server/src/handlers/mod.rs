//! HTTP handlers for the Landbridge REST API.
//!
//! This module organizes handlers by domain:
//! - `health`: Health check endpoint
//! - `neighbors`: Neighbor analysis of one country
//! - `route`: Shortest land route between two countries
//! - `region`: Regional statistics
//! - `search`: Attribute search over all countries

pub mod health;
pub mod helpers;
pub mod neighbors;
pub mod region;
pub mod route;
pub mod search;

pub use health::health_check;
pub use neighbors::country_neighbors;
pub use region::region_statistics;
pub use route::find_route;
pub use search::search_countries;
