//! Scrivener command-line host.

use clap::Parser;
use scrivener::GenerationDriver;
use scrivener::cli::{
    Cli, Commands, build_pipeline, handle_titles_command, handle_write_command, load_config,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "scrivener failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let pipeline = build_pipeline(&config, cli.api_key.as_deref(), cli.model.as_deref())?;
    info!(model = %pipeline.client().driver().model_name(), "Starting scrivener");

    match &cli.command {
        Commands::Titles(args) => {
            handle_titles_command(&pipeline, args).await?;
        }
        Commands::Write(args) => {
            handle_write_command(&pipeline, args).await?;
        }
    }
    Ok(())
}
