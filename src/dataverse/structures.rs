use serde::Deserialize;

/// Top level of the `/api/datasets/:persistentId/` response.
///
/// Only the fields leading to the file list are modelled; everything else
/// in the (rather large) document is ignored.
#[derive(Debug, Deserialize)]
pub struct DatasetResponse {
    pub data: DatasetData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetData {
    pub latest_version: DatasetVersion,
}

#[derive(Debug, Deserialize)]
pub struct DatasetVersion {
    pub files: Vec<FileMetadata>,
}

/// One entry of `latestVersion.files`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub data_file: DataFileRecord,
}

#[derive(Debug, Deserialize)]
pub struct DataFileRecord {
    pub filename: String,
    pub id: u64,
}

/// A file of the dataset as far as downloading is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub filename: String,
    pub file_id: u64,
}

/// Files of the latest dataset version, in the order the API lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub files: Vec<DataFile>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl From<DatasetResponse> for Manifest {
    fn from(response: DatasetResponse) -> Self {
        let files = response
            .data
            .latest_version
            .files
            .into_iter()
            .map(|meta| DataFile {
                filename: meta.data_file.filename,
                file_id: meta.data_file.id,
            })
            .collect();
        Self { files }
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a DataFile;
    type IntoIter = std::slice::Iter<'a, DataFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "OK",
        "data": {
            "id": 123,
            "identifier": "DVN/0TJX8Y",
            "latestVersion": {
                "versionNumber": 12,
                "files": [
                    {
                        "label": "README.txt",
                        "restricted": false,
                        "dataFile": { "id": 11, "filename": "README.txt", "filesize": 42 }
                    },
                    {
                        "label": "UNGDC_1946-2023.tgz",
                        "dataFile": { "id": 12, "filename": "UNGDC_1946-2023.tgz", "contentType": "application/x-gzip" }
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn manifest_keeps_api_order() {
        let response: DatasetResponse = serde_json::from_str(SAMPLE).unwrap();
        let manifest = Manifest::from(response);

        assert!(!manifest.is_empty());
        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.files,
            vec![
                DataFile {
                    filename: "README.txt".to_string(),
                    file_id: 11
                },
                DataFile {
                    filename: "UNGDC_1946-2023.tgz".to_string(),
                    file_id: 12
                },
            ]
        );
    }

    #[test]
    fn missing_latest_version_is_rejected() {
        let result = serde_json::from_str::<DatasetResponse>(r#"{"data": {}}"#);
        assert!(result.is_err());
    }
}
