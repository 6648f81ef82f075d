use indicatif::ProgressBar;
use reqwest::{Client, Response, StatusCode};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::structures::{DatasetResponse, Manifest};
use crate::config::Config;
use crate::progress;
use anyhow::{Context, Result};

/// Size of the slices written to disk while streaming a file.
pub const CHUNK_SIZE: usize = 1024;

/// Result of asking the API for the dataset description.
#[derive(Debug)]
pub enum ManifestLookup {
    Found(Manifest),
    /// The server answered with something other than `200 OK`.
    Unavailable(StatusCode),
}

/// Client for a single Dataverse installation
pub struct DataverseClient {
    client: Client,
    config: Config,
    transferred_bytes: AtomicU64,
}

impl DataverseClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            transferred_bytes: AtomicU64::new(0),
        })
    }

    /// Get total body bytes written to disk by [`download`](Self::download)
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes.load(Ordering::Relaxed)
    }

    /// Fetch the dataset description and turn it into a manifest.
    pub async fn fetch_manifest(&self) -> Result<ManifestLookup> {
        let url = self.config.dataset_url();
        tracing::debug!(%url, "fetching dataset metadata");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        if resp.status() != StatusCode::OK {
            tracing::debug!(status = %resp.status(), "dataset metadata unavailable");
            return Ok(ManifestLookup::Unavailable(resp.status()));
        }

        let body: DatasetResponse = resp
            .json()
            .await
            .with_context(|| format!("malformed dataset metadata from {}", url))?;

        let manifest = Manifest::from(body);
        tracing::debug!(files = manifest.len(), "dataset metadata received");
        Ok(ManifestLookup::Found(manifest))
    }

    /// Stream one data file into `dest`.
    ///
    /// The body is written whatever the status code; a non-success status is
    /// only logged. The bar length is set from `content-length` when the server
    /// sends one.
    ///
    /// # Arguments
    ///
    /// * `file_id` - Numeric data file id from the manifest
    /// * `dest` - Local path the body is written to (created or truncated)
    /// * `bar` - Progress bar advanced by every slice written
    ///
    /// # Returns
    ///
    /// Returns the number of bytes written. A transfer that breaks off returns
    /// the error and leaves the bytes received so far in `dest`.
    pub async fn download(&self, file_id: u64, dest: &Path, bar: &ProgressBar) -> Result<u64> {
        let url = self.config.datafile_url(file_id);
        tracing::debug!(%url, dest = %dest.display(), "downloading data file");

        let mut resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        if !resp.status().is_success() {
            tracing::warn!(%url, status = %resp.status(), "data file request not successful");
        }

        if let Some(total) = resp.content_length() {
            progress::set_total(bar, total);
        }

        let mut file = fs::File::create(dest)
            .await
            .with_context(|| format!("cannot create {}", dest.display()))?;

        let streamed = self.stream_body(&mut resp, &mut file, bar).await;
        // Flush even after a broken transfer so the partial file is complete on disk.
        file.flush().await?;

        streamed
    }

    async fn stream_body(
        &self,
        resp: &mut Response,
        file: &mut fs::File,
        bar: &ProgressBar,
    ) -> Result<u64> {
        let mut written = 0u64;
        while let Some(chunk) = resp.chunk().await? {
            for slice in chunk.chunks(CHUNK_SIZE) {
                file.write_all(slice).await?;
                written += slice.len() as u64;
                bar.inc(slice.len() as u64);
                self.transferred_bytes
                    .fetch_add(slice.len() as u64, Ordering::Relaxed);
            }
        }
        Ok(written)
    }
}
