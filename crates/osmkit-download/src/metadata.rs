//! Retrieval metadata written next to every downloaded extract.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::BoundingBox;
use crate::error::DownloadResult;

/// One record per download. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalMetadata {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "File location")]
    pub file_location: String,
    #[serde(rename = "Bounding box")]
    pub bounding_box: BoundingBox,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Retrieval (UTC)")]
    pub retrieved_at: DateTime<Utc>,
    /// Identifier of the binary that performed the download
    #[serde(rename = "Build")]
    pub build: String,
}

impl RetrievalMetadata {
    pub fn new(
        region: &str,
        file_location: &Path,
        bounding_box: BoundingBox,
        source: &url::Url,
        retrieved_at: DateTime<Utc>,
        build: &str,
    ) -> Self {
        Self {
            region: region.to_string(),
            file_location: file_location.display().to_string(),
            bounding_box,
            source: source.to_string(),
            retrieved_at,
            build: build.to_string(),
        }
    }

    /// Indented (two-space) JSON text of the record.
    pub fn to_pretty_json(&self) -> DownloadResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
