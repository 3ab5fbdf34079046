use api_rest::router;
use caredesk_core::{CoreConfig, Dashboard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the CareDesk application
///
/// Loads `.env` (if present), resolves the configuration once and serves the REST API.
///
/// # Environment Variables
/// - `CAREDESK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CAREDESK_SEED_DEMO_DATA`: Start with sample users, appointments and records (default: true)
/// - `RUST_LOG`: Extra tracing directives
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("caredesk_run=info".parse()?)
                .add_directive("caredesk_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var("CAREDESK_REST_ADDR").ok(),
        std::env::var("CAREDESK_SEED_DEMO_DATA").ok(),
    )?;

    tracing::info!("++ Starting CareDesk REST on {}", cfg.rest_addr());
    if !cfg.seed_demo_data() {
        tracing::info!("++ Demo data disabled");
    }

    let app = router(Dashboard::new(&cfg));
    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
