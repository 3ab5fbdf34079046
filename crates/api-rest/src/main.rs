//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the CareDesk REST API (with OpenAPI/Swagger UI) on its own. The workspace's main
//! `caredesk-run` binary does the same after loading a `.env` file.

use api_rest::router;
use caredesk_core::{CoreConfig, Dashboard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the CareDesk REST API server
///
/// # Environment Variables
/// - `CAREDESK_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `CAREDESK_SEED_DEMO_DATA`: Start with sample data (default: true)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("caredesk_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var("CAREDESK_REST_ADDR").ok(),
        std::env::var("CAREDESK_SEED_DEMO_DATA").ok(),
    )?;

    tracing::info!("-- Starting CareDesk REST API on {}", cfg.rest_addr());

    let app = router(Dashboard::new(&cfg));
    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
