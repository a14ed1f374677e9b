use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use bucket_sync::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    bucket_sync::run(cli).await
}
