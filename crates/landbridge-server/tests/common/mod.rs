//! Shared fixtures for server integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use landbridge_core::CountryRecord;
use landbridge_server::{router, AppState, CountryProvider, ProviderError, SnapshotProvider};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Western Europe plus a few disconnected countries elsewhere.
pub fn world() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("PRT")
            .with_name("Portugal")
            .with_capital("Lisbon")
            .with_population(10_305_564)
            .with_languages([("por", "Portuguese")])
            .with_region("Europe")
            .with_borders(["ESP"]),
        CountryRecord::new("ESP")
            .with_name("Spain")
            .with_capital("Madrid")
            .with_population(47_351_567)
            .with_languages([("spa", "Spanish")])
            .with_region("Europe")
            .with_borders(["FRA", "PRT"]),
        CountryRecord::new("FRA")
            .with_name("France")
            .with_capital("Paris")
            .with_population(67_391_582)
            .with_languages([("fra", "French")])
            .with_region("Europe")
            .with_borders(["ESP", "BEL", "DEU", "CHE"]),
        CountryRecord::new("BEL")
            .with_name("Belgium")
            .with_capital("Brussels")
            .with_population(11_555_997)
            .with_languages([("nld", "Dutch"), ("fra", "French"), ("deu", "German")])
            .with_region("Europe")
            .with_borders(["FRA", "DEU"]),
        CountryRecord::new("DEU")
            .with_name("Germany")
            .with_capital("Berlin")
            .with_population(83_240_525)
            .with_languages([("deu", "German")])
            .with_region("Europe")
            .with_borders(["FRA", "BEL", "CHE"]),
        CountryRecord::new("CHE")
            .with_name("Switzerland")
            .with_capital("Bern")
            .with_population(8_654_622)
            .with_languages([("fra", "French"), ("deu", "German"), ("ita", "Italian")])
            .with_region("Europe")
            .with_borders(["FRA", "DEU"]),
        CountryRecord::new("ISL")
            .with_name("Iceland")
            .with_capital("Reykjavik")
            .with_population(366_425)
            .with_languages([("isl", "Icelandic")])
            .with_region("Europe"),
        CountryRecord::new("JPN")
            .with_name("Japan")
            .with_capital("Tokyo")
            .with_population(125_836_021)
            .with_languages([("jpn", "Japanese")])
            .with_region("Asia"),
        CountryRecord::new("BRA")
            .with_name("Brazil")
            .with_capital("Brasília")
            .with_population(212_559_409)
            .with_languages([("por", "Portuguese")])
            .with_region("Americas")
            .with_borders(["ARG"]),
        CountryRecord::new("ARG")
            .with_name("Argentina")
            .with_capital("Buenos Aires")
            .with_population(45_376_763)
            .with_languages([("spa", "Spanish")])
            .with_region("Americas")
            .with_borders(["BRA"]),
    ]
}

/// App serving [`world`] from an in-memory snapshot.
pub fn create_test_app() -> Router {
    app_with(SnapshotProvider::from_records(world()))
}

/// App around any provider.
pub fn app_with(provider: impl CountryProvider + 'static) -> Router {
    router(Arc::new(AppState::new(provider)))
}

/// Provider whose upstream is always down.
pub struct UnavailableProvider;

fn unavailable() -> ProviderError {
    ProviderError::Status {
        status: 503,
        body: "upstream maintenance".to_string(),
    }
}

#[async_trait]
impl CountryProvider for UnavailableProvider {
    fn source_type(&self) -> &'static str {
        "unavailable"
    }

    async fn country(&self, _code: &str) -> landbridge_server::Result<CountryRecord> {
        Err(unavailable())
    }

    async fn all_countries(&self, _fields: &[&str]) -> landbridge_server::Result<Vec<CountryRecord>> {
        Err(unavailable())
    }

    async fn region(&self, _region: &str) -> landbridge_server::Result<Vec<CountryRecord>> {
        Err(unavailable())
    }
}

/// Provider that knows regions but returns no countries for them.
pub struct EmptyRegionProvider;

#[async_trait]
impl CountryProvider for EmptyRegionProvider {
    fn source_type(&self) -> &'static str {
        "empty"
    }

    async fn country(&self, code: &str) -> landbridge_server::Result<CountryRecord> {
        Err(ProviderError::NotFound(code.to_string()))
    }

    async fn all_countries(&self, _fields: &[&str]) -> landbridge_server::Result<Vec<CountryRecord>> {
        Ok(Vec::new())
    }

    async fn region(&self, _region: &str) -> landbridge_server::Result<Vec<CountryRecord>> {
        Ok(Vec::new())
    }
}

/// Send `request` and decode the JSON response.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    (status, json)
}

/// GET `uri`.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

/// POST `body` as JSON to `uri`.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}
