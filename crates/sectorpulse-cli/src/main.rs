mod cli;
mod config;
mod error;
mod telegram;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sectorpulse_core::{report, DerivativesClient, ReqwestHttpClient, SectorIndicesClient};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CliError;
use crate::telegram::ReportSender;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    // Delivery credentials are validated before any network activity.
    let sender = if cli.dry_run {
        None
    } else {
        Some(ReportSender::new(&Config::from_env()?))
    };

    // Each fetcher gets its own transport so session cookies stay separate.
    let sector_client = SectorIndicesClient::new(Arc::new(ReqwestHttpClient::new()))
        .with_timeout_ms(cli.timeout_ms);
    let derivatives_client = DerivativesClient::new(Arc::new(ReqwestHttpClient::new()))
        .with_timeout_ms(cli.timeout_ms);

    let report = report::generate(&sector_client, &derivatives_client).await;

    match sender {
        Some(sender) => sender.send(&report).await?,
        None => println!("{report}"),
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
