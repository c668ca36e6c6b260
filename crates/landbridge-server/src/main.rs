#![allow(clippy::doc_markdown)]
//! Landbridge Server - REST API for country land-route queries.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use landbridge_server::{
    provider::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS},
    router, AppState, ProviderConfig, RestCountriesProvider, SnapshotProvider,
};

/// Landbridge Server - country neighbors, land routes and regional statistics
#[derive(Parser, Debug)]
#[command(name = "landbridge-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the REST Countries compatible API
    #[arg(long, default_value = DEFAULT_API_URL, env = "API_URL")]
    api_url: String,

    /// Serve countries from a local JSON snapshot instead of the API
    #[arg(long, env = "LANDBRIDGE_COUNTRIES_FILE")]
    countries_file: Option<PathBuf>,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "LANDBRIDGE_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "LANDBRIDGE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "LANDBRIDGE_PORT")]
    port: u16,
}

/// Build CORS layer from environment configuration.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("LANDBRIDGE_CORS_ORIGIN") {
        Ok(origins) => {
            use tower_http::cors::AllowOrigin;
            let origin_list: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origin_list))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        Err(_) => {
            tracing::warn!(
                "CORS: permissive (dev mode). Set LANDBRIDGE_CORS_ORIGIN to restrict origins."
            );
            CorsLayer::permissive()
        }
    }
}

fn build_state(args: &Args) -> anyhow::Result<AppState> {
    if let Some(path) = &args.countries_file {
        tracing::info!("Country source: snapshot {}", path.display());
        return Ok(AppState::new(SnapshotProvider::from_json_file(path)?));
    }
    let config = ProviderConfig::new(args.api_url.clone())
        .with_timeout(Duration::from_secs(args.request_timeout_secs));
    Ok(AppState::new(RestCountriesProvider::new(config)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting Landbridge server...");

    let state = Arc::new(build_state(&args)?);
    let app = router(state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use landbridge_server::ApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    };

    let app = app
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Landbridge server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
