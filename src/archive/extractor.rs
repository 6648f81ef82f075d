use anyhow::{Context, Result, anyhow};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tar::Archive;
use tokio::fs;

use super::cleanup::{remove_metadata_files, rename_ungdc_directory};
use super::structures::{ArchiveOutcome, ArchiveStatus, UnpackReport};
use crate::sync::ARCHIVE_SUFFIX;

/// Path whose existence means `archive` was already unpacked into `output_dir`.
///
/// This is the archive's file name with `.tgz` stripped, e.g.
/// `UNGDC_1946-2023.tgz` maps to `{output_dir}/UNGDC_1946-2023`.
pub fn sentinel_path(archive: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = archive
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Invalid archive file name: {}", archive.display()))?;

    let stem = file_name
        .strip_suffix(ARCHIVE_SUFFIX)
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| anyhow!("Not a {} archive: {}", ARCHIVE_SUFFIX, file_name))?;

    Ok(output_dir.join(stem))
}

/// Unpack a gzip-compressed tarball into `dest`.
///
/// Entry paths are taken from the archive as they are; only trusted archives
/// should be passed here.
pub fn unpack_tgz(archive: &Path, dest: &Path) -> Result<()> {
    let file =
        File::open(archive).with_context(|| format!("cannot open {}", archive.display()))?;
    let mut tarball = Archive::new(GzDecoder::new(file));
    tarball.set_preserve_mtime(true);
    tarball.unpack(dest)?;
    Ok(())
}

/// Unpack, strip `._*` files and apply the UNGDC rename.
fn extract_and_tidy(archive: &Path, output_dir: &Path) -> Result<ArchiveStatus> {
    unpack_tgz(archive, output_dir)?;
    let removed_metadata_files = remove_metadata_files(output_dir)?;
    let renamed = rename_ungdc_directory(output_dir)?;
    tracing::debug!(
        archive = %archive.display(),
        removed_metadata_files,
        renamed,
        "post-processing done"
    );
    Ok(ArchiveStatus::Extracted {
        removed_metadata_files,
        renamed,
    })
}

/// Unpacks downloaded archives into an output directory
pub struct ArchiveExtractor {
    output_dir: PathBuf,
}

impl ArchiveExtractor {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Handle every archive in order; a failure never stops the next one.
    pub async fn extract_all(&self, archives: &[PathBuf]) -> UnpackReport {
        let mut report = UnpackReport::default();

        for archive in archives {
            let status = match self.extract(archive).await {
                Ok(status) => status,
                Err(e) => {
                    eprintln!("Error extracting {}: {:#}", archive.display(), e);
                    ArchiveStatus::Failed(format!("{:#}", e))
                }
            };
            report.outcomes.push(ArchiveOutcome {
                archive: archive.clone(),
                status,
            });
        }

        report
    }

    /// Extract a single archive unless its sentinel path already exists.
    pub async fn extract(&self, archive: &Path) -> Result<ArchiveStatus> {
        let sentinel = sentinel_path(archive, &self.output_dir)?;

        if fs::try_exists(&sentinel).await? {
            println!("Already extracted: {}", archive.display());
            return Ok(ArchiveStatus::AlreadyExtracted);
        }

        println!("Extracting {}...", archive.display());

        let archive_path = archive.to_path_buf();
        let output_dir = self.output_dir.clone();
        let status =
            tokio::task::spawn_blocking(move || extract_and_tidy(&archive_path, &output_dir))
                .await
                .map_err(|e| anyhow!("extraction task failed: {}", e))??;

        println!(
            "Extracted {} to {}",
            archive.display(),
            self.output_dir.display()
        );

        Ok(status)
    }
}
