use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_DATASET_DOI, DEFAULT_OUTPUT_DIR, DEFAULT_SERVER};

#[derive(Parser, Debug)]
#[command(name = "dataverse-fetch")]
#[command(version)]
#[command(about = "Download a Dataverse dataset and unpack its archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  dataverse-fetch                                  fetch the default dataset into data/raw\n  \
  dataverse-fetch --output-dir /tmp/ungdc          fetch into another directory\n  \
  dataverse-fetch --doi 10.7910/DVN/XXXX --server demo.dataverse.org")]
pub struct Cli {
    /// Dataset DOI, without the `doi:` prefix
    #[arg(long, value_name = "DOI", default_value = DEFAULT_DATASET_DOI)]
    pub doi: String,

    /// Dataverse host name (or full http(s) URL)
    #[arg(long, value_name = "HOST", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Directory the files are downloaded and unpacked into
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            dataset_doi: self.doi,
            server: self.server,
            output_dir: self.output_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_yields_default_config() {
        let cli = Cli::try_parse_from(["dataverse-fetch"]).unwrap();
        assert_eq!(cli.into_config(), Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "dataverse-fetch",
            "--doi",
            "10.1/ABC",
            "--server",
            "demo.dataverse.org",
            "--output-dir",
            "out",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.dataset_doi, "10.1/ABC");
        assert_eq!(config.server, "demo.dataverse.org");
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }
}
