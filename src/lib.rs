//! # dataverse-fetch
//!
//! Download every file of a Dataverse dataset and unpack its `.tgz` archives.
//!
//! A run has three sequential stages:
//!
//! 1. Fetch the dataset description from the native API and build a [`Manifest`]
//! 2. Download each manifest entry that does not exist locally yet
//! 3. Unpack each downloaded `.tgz`, unless its extraction target already exists
//!
//! Re-running is cheap: existing files are not downloaded again and unpacked
//! archives are not extracted again. Existence is the only check, so a file
//! left behind by an interrupted transfer has to be deleted by hand to be
//! fetched again.
//!
//! ## Example
//!
//! ```no_run
//! use dataverse_fetch::{Config, RunOutcome, download_dataset};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config {
//!         output_dir: "/tmp/ungdc".into(),
//!         ..Config::default()
//!     };
//!
//!     match download_dataset(&config).await? {
//!         RunOutcome::Completed(summary) => {
//!             println!("{} archives unpacked", summary.unpack.extracted());
//!         }
//!         RunOutcome::MetadataUnavailable(status) => {
//!             println!("metadata request failed: {}", status);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod dataverse;
pub mod pipeline;
pub mod progress;
pub mod sync;

pub use archive::{ArchiveExtractor, ArchiveOutcome, ArchiveStatus, UnpackReport};
pub use cli::Cli;
pub use config::Config;
pub use dataverse::{DataFile, DataverseClient, Manifest, ManifestLookup};
pub use pipeline::{RunOutcome, RunSummary, download_dataset};
pub use sync::{ARCHIVE_SUFFIX, SyncReport, sync_files};
