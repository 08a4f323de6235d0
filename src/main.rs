//! Document service entry point.
//!
//! Loads `.env` and the environment configuration, initializes logging, then
//! dispatches to the selected command.

use anyhow::Context;
use clap::Parser;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use docsvc_cli::Cli;
use docsvc_core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config);

    let span = root_span(&config);
    if let Err(e) = cli.execute(config).instrument(span).await {
        tracing::error!(kind = %e.kind, error = %e.message, "Command failed");
        return Err(e).context("document-service exited with an error");
    }
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.json(config.app.structured_logs()) {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Span every log line of the process is nested under.
///
/// With the APM tracer enabled it carries the tags the agent correlates on.
fn root_span(config: &AppConfig) -> tracing::Span {
    if !config.tracer.enable_tracer {
        return tracing::Span::none();
    }

    tracing::info!(agent = %config.tracer.agent_addr(), "APM tracer tagging enabled");
    tracing::info_span!(
        "document-service",
        service = %config.app.name,
        env = %config.tracer.environment(&config.app.environment),
        version = %config.app.version,
    )
}
