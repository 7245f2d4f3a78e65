//! docdrift: recommend documentation updates for CRD schema changes
//!
//! This binary wires the linear pipeline together: acquire a git diff,
//! restrict it to CRD schema files, search a cloned documentation repository
//! for related files, and ask a hosted model for update recommendations.

use clap::Parser;
use tracing::error;

use docdrift_cli::config::Config;
use docdrift_cli::pipeline;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = config.validate() {
        error!("{err}");
        std::process::exit(1);
    }

    if let Err(err) = pipeline::run(&config).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
