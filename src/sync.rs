//! Bring the local output directory in line with a dataset manifest.
//!
//! A file is considered present as soon as something with its name exists in
//! the output directory. Sizes are not compared, so a transfer that was cut
//! short on a previous run is never retried unless the partial file is
//! removed by hand.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::dataverse::{DataverseClient, Manifest};
use crate::progress;

/// File name suffix of the archives that get unpacked after downloading.
pub const ARCHIVE_SUFFIX: &str = ".tgz";

/// What a synchronisation pass did, in manifest order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Files fetched during this pass.
    pub downloaded: Vec<PathBuf>,
    /// Files that already existed locally.
    pub skipped: Vec<PathBuf>,
    /// Local paths of every `.tgz` in the manifest, downloaded now or earlier.
    pub archives: Vec<PathBuf>,
}

pub fn is_archive(file_name: &str) -> bool {
    file_name.ends_with(ARCHIVE_SUFFIX)
}

/// Download every manifest entry missing from `output_dir`.
///
/// Files are handled strictly one after another. A failed transfer aborts the
/// pass and returns the error; files already handled stay on disk.
///
/// # Arguments
///
/// * `client` - Client for the Dataverse installation hosting the files
/// * `manifest` - Files to bring in, in download order
/// * `output_dir` - Existing directory the files are written to
///
/// # Returns
///
/// Returns a [`SyncReport`] listing downloaded and skipped files and the
/// local paths of all `.tgz` archives.
pub async fn sync_files(
    client: &DataverseClient,
    manifest: &Manifest,
    output_dir: &Path,
) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    for entry in manifest {
        let file_path = output_dir.join(&entry.filename);

        if fs::try_exists(&file_path).await? {
            println!("File already downloaded: {}", entry.filename);
            report.skipped.push(file_path.clone());
        } else {
            let bar = progress::file_progress(&entry.filename);
            match client.download(entry.file_id, &file_path, &bar).await {
                Ok(bytes) => {
                    bar.finish();
                    tracing::info!(file = %entry.filename, bytes, "downloaded");
                    report.downloaded.push(file_path.clone());
                }
                Err(e) => {
                    bar.abandon();
                    return Err(e.context(format!("failed to download {}", entry.filename)));
                }
            }
        }

        if is_archive(&entry.filename) {
            report.archives.push(file_path);
        }
    }

    Ok(report)
}
