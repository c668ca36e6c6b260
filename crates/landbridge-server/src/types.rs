//! Request and response types for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Informational response for well-formed queries without a result.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Configured country-data source.
    pub source: String,
}

/// Query parameters for `/route`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteQuery {
    /// Origin country code (cca3).
    pub from: String,
    /// Destination country code (cca3).
    pub to: String,
}

/// Land-route response: either the route or an explanatory message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RouteResponse {
    /// A route exists.
    Found {
        /// Country codes from origin to destination, both included.
        route: Vec<String>,
        /// Number of border crossings.
        hops: usize,
    },
    /// No land route exists.
    NotFound {
        /// Human-readable message.
        message: String,
    },
}

/// Messages shared by handlers and tests.
pub mod messages {
    /// Country without land borders.
    pub const NO_NEIGHBORS: &str = "This country has no neighboring countries.";
    /// Route query with an unknown origin or destination.
    pub const INVALID_CODES: &str = "One or both country codes are invalid.";
    /// Route query between disconnected countries.
    pub const NO_ROUTE: &str = "No land route found between the specified countries.";
    /// Region lookup that returned no countries.
    pub const EMPTY_REGION: &str = "No countries found in this region.";
}
