//! Landbridge Server library.
//!
//! Exposes the router, shared state and handlers so the binary and the
//! integration tests assemble the same application.

#![warn(missing_docs)]

pub mod error;
pub mod handlers;
pub mod provider;
pub mod types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

pub use error::{ProviderError, Result};
pub use handlers::{
    country_neighbors, find_route, health_check, region_statistics, search_countries,
};
pub use provider::{CountryProvider, ProviderConfig, RestCountriesProvider, SnapshotProvider};
pub use types::{ErrorResponse, HealthResponse, MessageResponse, RouteQuery, RouteResponse};

/// Application state shared across handlers.
pub struct AppState {
    /// Source of country data.
    pub provider: Arc<dyn CountryProvider>,
}

impl AppState {
    /// Creates state around `provider`.
    pub fn new(provider: impl CountryProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

/// Build the application router with every endpoint.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/countries/{code}/neighbors", get(country_neighbors))
        .route("/countries/search", post(search_countries))
        .route("/route", get(find_route))
        .route("/region/{region}/stats", get(region_statistics))
        .with_state(state)
}

/// OpenAPI documentation for the Landbridge REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Landbridge API",
        description = "Country neighbors, shortest land routes, regional statistics and attribute search",
        license(name = "MIT")
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::neighbors::country_neighbors,
        crate::handlers::route::find_route,
        crate::handlers::region::region_statistics,
        crate::handlers::search::search_countries,
    ),
    components(schemas(
        ErrorResponse,
        MessageResponse,
        HealthResponse,
        RouteResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "countries", description = "Neighbor analysis and search"),
        (name = "routes", description = "Shortest land routes"),
        (name = "regions", description = "Regional statistics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/countries/{code}/neighbors",
            "/countries/search",
            "/route",
            "/region/{region}/stats",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
