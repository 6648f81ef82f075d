use anyhow::{Context, Result};
use reqwest::StatusCode;
use tokio::fs;

use crate::archive::{ArchiveExtractor, UnpackReport};
use crate::config::Config;
use crate::dataverse::{DataverseClient, ManifestLookup};
use crate::sync::{SyncReport, sync_files};

/// What a complete run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub sync: SyncReport,
    pub unpack: UnpackReport,
    /// Body bytes fetched from the access API during this run.
    pub transferred_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The metadata request was answered with a non-200 status; nothing was
    /// downloaded and the output directory was left untouched.
    MetadataUnavailable(StatusCode),
    Completed(RunSummary),
}

/// Fetch the manifest, download missing files, then unpack the archives.
///
/// The three stages run strictly one after another. Download errors end the
/// run; extraction errors are recorded per archive in the summary.
///
/// # Arguments
///
/// * `config` - Dataset DOI, Dataverse server and output directory
///
/// # Returns
///
/// Returns [`RunOutcome::MetadataUnavailable`] when the metadata request is not
/// answered with `200 OK`, otherwise [`RunOutcome::Completed`] with what each
/// stage did. Transport, filesystem and JSON errors are returned as `Err`.
pub async fn download_dataset(config: &Config) -> Result<RunOutcome> {
    println!("Downloading dataset...");

    let client = DataverseClient::new(config.clone())?;

    let manifest = match client.fetch_manifest().await? {
        ManifestLookup::Found(manifest) => manifest,
        ManifestLookup::Unavailable(status) => {
            return Ok(RunOutcome::MetadataUnavailable(status));
        }
    };

    if manifest.is_empty() {
        tracing::warn!(doi = %config.dataset_doi, "latest dataset version lists no files");
    }

    fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("cannot create {}", config.output_dir.display()))?;

    let sync = sync_files(&client, &manifest, &config.output_dir).await?;
    tracing::info!(
        downloaded = sync.downloaded.len(),
        skipped = sync.skipped.len(),
        archives = sync.archives.len(),
        "files synchronised"
    );

    let unpack = ArchiveExtractor::new(&config.output_dir)
        .extract_all(&sync.archives)
        .await;

    Ok(RunOutcome::Completed(RunSummary {
        sync,
        unpack,
        transferred_bytes: client.transferred_bytes(),
    }))
}
