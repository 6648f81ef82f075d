//! Unpacking of downloaded `.tgz` archives.
//!
//! ## Architecture
//!
//! - [`extractor`]: sentinel check and gzip/tar extraction, one archive at a time
//! - [`cleanup`]: post-processing of the output directory after each extraction
//! - [`structures`]: per-archive outcomes and the report collecting them
//!
//! ## Post-processing
//!
//! Archives produced with macOS `tar` carry AppleDouble `._*` sidecar files;
//! these are deleted from the whole output directory after every extraction.
//! The UN General Debate corpus additionally unpacks into a `TXT` directory,
//! which is renamed to `UNGDC_1946-2023` so that the archive's sentinel path
//! exists on the next run.
//!
//! ## Limitations
//!
//! - Only gzip-compressed tar archives with a `.tgz` suffix
//! - No checksum or completeness check of the archive
//! - A failed extraction is not rolled back

mod cleanup;
mod extractor;
mod structures;

pub use cleanup::{
    METADATA_PREFIX, UNGDC_SOURCE_DIR, UNGDC_TARGET_DIR, remove_metadata_files,
    rename_ungdc_directory,
};
pub use extractor::{ArchiveExtractor, sentinel_path, unpack_tgz};
pub use structures::*;
