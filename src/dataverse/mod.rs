//! Dataverse native API access.
//!
//! Two endpoints are used:
//!
//! - `GET /api/datasets/:persistentId/?persistentId=doi:{doi}` returns the dataset
//!   description; the files of its latest version form the [`Manifest`].
//! - `GET /api/access/datafile/{id}` streams the raw bytes of one file.
//!
//! No authentication is sent, so only public datasets can be fetched.

mod client;
mod structures;

pub use client::{DataverseClient, ManifestLookup};
pub use structures::{DataFile, DatasetResponse, Manifest};
