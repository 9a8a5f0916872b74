// Prints the OpenAPI document for the error response body.
// Usage: cargo run --bin openapi_export > errors-openapi.json

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use api_errors::openapi::ApiDoc;
use api_errors::{ErrorRenderer, RenderConfig};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api_errors=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RenderConfig::from_env().context("Failed to load configuration")?;
    let renderer = ErrorRenderer::new(&config);
    info!(
        default_http_code = renderer.default_http_code().as_u16(),
        "Exporting error OpenAPI document"
    );

    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize OpenAPI document")?;
    println!("{}", json);
    Ok(())
}
