use std::path::PathBuf;

/// How a single archive was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveStatus {
    /// Unpacked during this run.
    Extracted {
        /// Number of `._*` files deleted after unpacking.
        removed_metadata_files: usize,
        /// Whether the `TXT` directory was renamed.
        renamed: bool,
    },
    /// The extraction target already existed.
    AlreadyExtracted,
    /// Unpacking or post-processing failed; the message is the error chain.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub archive: PathBuf,
    pub status: ArchiveStatus,
}

/// Outcomes of one unpacking pass, in the order the archives were given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnpackReport {
    pub outcomes: Vec<ArchiveOutcome>,
}

impl UnpackReport {
    pub fn extracted(&self) -> usize {
        self.count(|s| matches!(s, ArchiveStatus::Extracted { .. }))
    }

    pub fn already_extracted(&self) -> usize {
        self.count(|s| matches!(s, ArchiveStatus::AlreadyExtracted))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ArchiveStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&ArchiveStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}
