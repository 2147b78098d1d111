use clap::Parser;
use metrics_exporter_statsd::StatsdBuilder;
use paddock::config::{Config, MetricsConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Read-through aggregation service for OpenF1 session data")]
struct Cli {
    /// Path to a YAML config file. Falls back to environment configuration
    /// (OPENF1_API_URL) when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn install_statsd_recorder(config: &MetricsConfig) {
    let recorder =
        StatsdBuilder::from(config.statsd_host.as_str(), config.statsd_port).build(Some("paddock"));

    match recorder {
        Ok(recorder) => {
            if metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("metrics recorder already installed");
            }
        }
        Err(e) => tracing::warn!(error = %e, "could not set up statsd metrics"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "could not load config");
                return ExitCode::FAILURE;
            }
        },
        None => Config::from_env(),
    };

    if let Some(metrics_config) = &config.metrics {
        install_statsd_recorder(metrics_config);
    }

    if let Err(e) = paddock::run(config).await {
        tracing::error!(error = %e, "server exited");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
