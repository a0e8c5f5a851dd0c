//! Yewo Scam Detector — Binary Entrypoint
//! Loads configuration and both model artifacts, then boots the Axum HTTP
//! server. Artifact loading happens before the listener opens: a service
//! without its models must not accept a single request.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use yewo_scam_detector::api;
use yewo_scam_detector::config::{AppConfig, TelemetryConfig};
use yewo_scam_detector::engine::ScanEngine;
use yewo_scam_detector::metrics::Metrics;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.telemetry)?;

    let engine = match ScanEngine::load(&config.models.dir) {
        Ok(engine) => engine,
        Err(err) => {
            error!(
                target: "scan",
                error = %err,
                "FATAL: could not load models, the service cannot start"
            );
            return Err(err.into());
        }
    };

    let metrics = Metrics::init()?;
    let app = api::create_router(engine).merge(metrics.router());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, model_dir = %config.models.dir.display(), "yewo scam detector ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// RUST_LOG wins; the config value is the fallback filter.
fn init_tracing(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| anyhow::anyhow!("invalid log filter {:?}: {e}", config.log_level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init: {e}"))?;
    Ok(())
}
