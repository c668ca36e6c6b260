//! Land-route handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use landbridge_core::{build_graph, shortest_path, Route};
use std::sync::Arc;

use super::helpers::{error_response, internal_error, provider_error, ApiError};
use crate::provider::ROUTE_FIELDS;
use crate::types::{messages, ErrorResponse, RouteQuery, RouteResponse};
use crate::AppState;

/// Find the shortest land route between two countries.
///
/// The border graph is rebuilt from the provider's current country list on
/// every request. A route minimizes the number of border crossings; among
/// equally short routes the one returned is implementation-defined.
///
/// # Errors
///
/// Returns an error tuple with status code and error response if either code
/// is unknown, or the data service fails.
#[utoipa::path(
    get,
    path = "/route",
    params(RouteQuery),
    responses(
        (status = 200, description = "Route found, or a message when no land route exists", body = RouteResponse),
        (status = 400, description = "One or both country codes are invalid", body = ErrorResponse),
        (status = 502, description = "Country data service unavailable", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn find_route(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, ApiError> {
    let records = state
        .provider
        .all_countries(ROUTE_FIELDS)
        .await
        .map_err(|e| provider_error("Route", "Country data not found", &e))?;

    let RouteQuery { from, to } = params;
    let route = tokio::task::spawn_blocking(move || -> Option<Route> {
        let graph = build_graph(&records);
        if !graph.contains(&from) || !graph.contains(&to) {
            return None;
        }
        Some(shortest_path(&graph, &from, &to))
    })
    .await
    .map_err(|e| internal_error("Route", &e))?;

    match route {
        None => Err(error_response(
            StatusCode::BAD_REQUEST,
            messages::INVALID_CODES,
        )),
        Some(Route::Found(path)) => Ok(Json(RouteResponse::Found {
            hops: path.len() - 1,
            route: path,
        })),
        Some(Route::NotFound) => Ok(Json(RouteResponse::NotFound {
            message: messages::NO_ROUTE.to_string(),
        })),
    }
}
