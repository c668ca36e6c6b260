//! Neighbor analysis handler.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use landbridge_core::analyze_neighbors;
use std::sync::Arc;

use super::helpers::{provider_error, validate_code, ApiError};
use crate::types::{messages, ErrorResponse, MessageResponse};
use crate::AppState;

/// Analyze the countries bordering `code`.
///
/// Returns each neighbor's name, capital and population, their total
/// population, and the neighbors sharing at least one language with the
/// country. Neighbors that fail to load are skipped.
///
/// # Errors
///
/// Returns an error tuple with status code and error response if the code is
/// malformed, the country does not exist, or the data service fails.
#[utoipa::path(
    get,
    path = "/countries/{code}/neighbors",
    params(
        ("code" = String, Path, description = "Country code (cca2, cca3 or ccn3)")
    ),
    responses(
        (status = 200, description = "Neighbor analysis, or a message for countries without land borders", body = Object),
        (status = 400, description = "Malformed country code", body = ErrorResponse),
        (status = 404, description = "Country not found", body = ErrorResponse),
        (status = 502, description = "Country data service unavailable", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn country_neighbors(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    validate_code(&code)?;

    let country = state
        .provider
        .country(&code)
        .await
        .map_err(|e| provider_error("Neighbors", "Country not found", &e))?;

    if country.borders().is_empty() {
        return Ok(Json(MessageResponse::new(messages::NO_NEIGHBORS)).into_response());
    }

    let neighbors = state.provider.countries_by_codes(country.borders()).await;
    if neighbors.len() < country.borders().len() {
        tracing::warn!(
            code = %code,
            expected = country.borders().len(),
            loaded = neighbors.len(),
            "Neighbor analysis is missing some bordering countries"
        );
    }

    Ok(Json(analyze_neighbors(&country, &neighbors)).into_response())
}
