//! Regional statistics handler.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use landbridge_core::region_stats;
use std::sync::Arc;

use super::helpers::{provider_error, validate_region, ApiError};
use crate::types::{messages, ErrorResponse, MessageResponse};
use crate::AppState;

/// Compute statistics for every country of a region.
///
/// # Errors
///
/// Returns an error tuple with status code and error response if the region
/// name is malformed, unknown, or the data service fails.
#[utoipa::path(
    get,
    path = "/region/{region}/stats",
    params(
        ("region" = String, Path, description = "Region name, e.g. Europe")
    ),
    responses(
        (status = 200, description = "Region statistics, or a message for an empty region", body = Object),
        (status = 400, description = "Malformed region name", body = ErrorResponse),
        (status = 404, description = "Region not found", body = ErrorResponse),
        (status = 502, description = "Country data service unavailable", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn region_statistics(
    State(state): State<Arc<AppState>>,
    Path(region): Path<String>,
) -> Result<Response, ApiError> {
    validate_region(&region)?;

    let records = state
        .provider
        .region(&region)
        .await
        .map_err(|e| provider_error("Region stats", "Region not found", &e))?;

    Ok(match region_stats(&records) {
        Some(stats) => Json(stats).into_response(),
        None => Json(MessageResponse::new(messages::EMPTY_REGION)).into_response(),
    })
}
