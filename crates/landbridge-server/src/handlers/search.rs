//! Attribute search handler.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use landbridge_core::{search, CountrySummary, SearchFilter};
use std::sync::Arc;

use super::helpers::{error_response, provider_error, ApiError};
use crate::provider::SEARCH_FIELDS;
use crate::types::ErrorResponse;
use crate::AppState;

/// Search countries by population range, languages and region.
///
/// The JSON body holds optional `min_population`, `max_population`,
/// `languages` and `region` criteria, all of which must match. An absent,
/// empty or `null` body matches every country. Population bounds are signed,
/// so a negative lower bound matches every population.
///
/// # Errors
///
/// Returns an error tuple with status code and error response if the body is
/// not a valid filter, or the data service fails.
#[utoipa::path(
    post,
    path = "/countries/search",
    request_body(content = Object, content_type = "application/json", description = "Optional search filter"),
    responses(
        (status = 200, description = "Matching countries", body = Object),
        (status = 400, description = "Invalid search body", body = ErrorResponse),
        (status = 502, description = "Country data service unavailable", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn search_countries(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<CountrySummary>>, ApiError> {
    let filter = parse_filter(&body)?;

    let records = state
        .provider
        .all_countries(SEARCH_FIELDS)
        .await
        .map_err(|e| provider_error("Search", "Country data not found", &e))?;

    Ok(Json(search(&records, &filter)))
}

fn parse_filter(body: &[u8]) -> Result<SearchFilter, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SearchFilter::default());
    }
    serde_json::from_slice::<Option<SearchFilter>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, format!("Invalid search body: {e}")))
}
