use std::path::PathBuf;

/// Persistent identifier of the UN General Debate corpus.
pub const DEFAULT_DATASET_DOI: &str = "10.7910/DVN/0TJX8Y";

/// Harvard's public Dataverse installation.
pub const DEFAULT_SERVER: &str = "dataverse.harvard.edu";

/// Where files land when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "data/raw";

/// Everything a single run needs to know.
///
/// `server` is normally a bare hostname, in which case requests go out over
/// HTTPS. A server that already carries an `http://` or `https://` scheme is
/// used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset_doi: String,
    pub server: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_doi: DEFAULT_DATASET_DOI.to_string(),
            server: DEFAULT_SERVER.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    pub fn is_http_url(&self) -> bool {
        self.server.starts_with("http://") || self.server.starts_with("https://")
    }

    /// Scheme and authority every API path is appended to.
    pub fn base_url(&self) -> String {
        let server = self.server.trim_end_matches('/');
        if self.is_http_url() {
            server.to_string()
        } else {
            format!("https://{}", server)
        }
    }

    /// Native API endpoint describing the dataset and its latest version.
    pub fn dataset_url(&self) -> String {
        format!(
            "{}/api/datasets/:persistentId/?persistentId=doi:{}",
            self.base_url(),
            self.dataset_doi
        )
    }

    /// Access API endpoint streaming the raw bytes of one data file.
    pub fn datafile_url(&self, file_id: u64) -> String {
        format!("{}/api/access/datafile/{}", self.base_url(), file_id)
    }
}
