//! Main entry point for the dataverse-fetch CLI application.

use anyhow::Result;
use clap::Parser;
use indicatif::HumanBytes;
use tracing_subscriber::EnvFilter;

use dataverse_fetch::{Cli, RunOutcome, download_dataset};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = Cli::parse().into_config();

    match download_dataset(&config).await? {
        // Reported, not signalled through the exit status
        RunOutcome::MetadataUnavailable(status) => {
            println!("Failed to fetch dataset metadata: {}", status.as_u16());
        }
        RunOutcome::Completed(summary) => {
            println!(
                "\nDownloaded: {}, already present: {}, total bytes transferred: {}",
                summary.sync.downloaded.len(),
                summary.sync.skipped.len(),
                HumanBytes(summary.transferred_bytes)
            );
            println!(
                "Archives extracted: {}, already extracted: {}, failed: {}",
                summary.unpack.extracted(),
                summary.unpack.already_extracted(),
                summary.unpack.failed()
            );
        }
    }

    Ok(())
}
