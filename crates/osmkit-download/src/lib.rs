//! Download OpenStreetMap extracts for named bounding boxes.
//!
//! A [`RegionDownloader`] walks a [`DownloaderConfig`] region table in order,
//! issues one blocking GET per region, writes the raw response to disk and
//! records a [`RetrievalMetadata`] document next to it. Failures are logged
//! per region and never abort the batch.
//!
//! - `config` - region table, URL and path templates
//! - `template` - URL/path rendering
//! - `http` - [`HttpBackend`] seam and the reqwest implementation
//! - `logged_file` - file handles that log open and close
//! - `metadata` - the per-download record
//! - `downloader` - single downloads and the batch loop

#![deny(unsafe_code)]

mod config;
mod downloader;
mod error;
mod http;
mod logged_file;
mod metadata;
mod template;

#[cfg(test)]
mod test_log;

// ============================================================================
// Public API
// ============================================================================

pub use config::{
    BoundingBox, DEFAULT_MAP_PATH_TEMPLATE, DEFAULT_META_PATH_TEMPLATE, DEFAULT_URL_TEMPLATE,
    DownloaderConfig, RegionTable,
};
pub use downloader::{BatchSummary, FailedRegion, RegionDownloader};
pub use error::{DownloadError, DownloadResult, ErrorCategory};
pub use http::{HttpBackend, ReqwestBackend};
pub use logged_file::{LoggedFile, OpenMode};
pub use metadata::RetrievalMetadata;
pub use template::{output_dirs, render_path, render_url};

// Backend implementations outside this crate need to name the request URL type.
pub use url::Url;
