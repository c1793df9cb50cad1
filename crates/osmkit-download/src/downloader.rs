//! Region downloads and the sequential batch loop.

use std::path::PathBuf;

use chrono::Utc;

use crate::config::DownloaderConfig;
use crate::error::{DownloadError, DownloadResult, ErrorCategory};
use crate::http::HttpBackend;
use crate::logged_file::{LoggedFile, OpenMode};
use crate::metadata::RetrievalMetadata;
use crate::template::{output_dirs, render_path, render_url};

/// A region that failed during a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRegion {
    pub region: String,
    pub category: ErrorCategory,
    pub message: String,
}

/// Outcome of [`RegionDownloader::download_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Regions downloaded successfully, in processing order.
    pub succeeded: Vec<String>,
    /// Regions that failed, in processing order.
    pub failed: Vec<FailedRegion>,
}

impl BatchSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Downloads map extracts for the configured regions, one at a time.
pub struct RegionDownloader<B> {
    config: DownloaderConfig,
    backend: B,
    build_id: String,
}

impl<B: HttpBackend> RegionDownloader<B> {
    pub fn new(config: DownloaderConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            build_id: osmkit_build_info::BUILD_ID.to_string(),
        }
    }

    /// Override the build identifier recorded in metadata.
    #[must_use]
    pub fn with_build_id(mut self, build_id: impl Into<String>) -> Self {
        self.build_id = build_id.into();
        self
    }

    pub const fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Create every output directory. Existing directories are fine.
    pub fn prepare_output_dirs(&self) -> DownloadResult<Vec<PathBuf>> {
        let dirs = output_dirs(&self.config);
        for dir in &dirs {
            std::fs::create_dir_all(dir).map_err(|e| DownloadError::io(dir, e))?;
            tracing::debug!(dir = %dir.display(), "Output directory ready");
        }
        Ok(dirs)
    }

    /// Download one region: fetch the extract, write it, then write its metadata.
    ///
    /// A failure while writing may leave a partial file behind.
    pub fn download(&self, region: &str) -> DownloadResult<RetrievalMetadata> {
        let bbox = self
            .config
            .region(region)
            .ok_or_else(|| DownloadError::UnknownRegion {
                region: region.to_string(),
            })?;

        let url = render_url(self.config.url_template(), bbox)?;
        let out = render_path(self.config.map_path_template(), region);

        let meta = RetrievalMetadata::new(region, &out, bbox, &url, Utc::now(), &self.build_id);

        tracing::debug!(%url, "Requesting map extract");
        let body = self.backend.get(&url)?;
        tracing::debug!(bytes = body.len(), "Received map extract");

        LoggedFile::create(&out, OpenMode::WriteBinary)?.write_bytes(&body)?;

        let meta_path = render_path(self.config.meta_path_template(), region);
        let record = meta.to_pretty_json()?;
        LoggedFile::create(&meta_path, OpenMode::WriteText)?.write_bytes(&record)?;

        Ok(meta)
    }

    /// Download every configured region in table order.
    ///
    /// Per-region failures are logged and recorded in the summary; none of
    /// them stop the batch.
    pub fn download_all(&self) -> BatchSummary {
        let regions: Vec<String> = self.config.regions().keys().cloned().collect();
        self.download_regions(&regions)
    }

    /// Download the named regions in the given order.
    ///
    /// Names missing from the table fail individually with a lookup error.
    pub fn download_regions<S: AsRef<str>>(&self, regions: &[S]) -> BatchSummary {
        if let Err(e) = self.prepare_output_dirs() {
            tracing::error!(error = %e, "Could not prepare output directories");
        }

        let mut summary = BatchSummary::default();

        for region in regions {
            let region = region.as_ref();
            tracing::info!("Downloading region '{region}'...");

            match self.download(region) {
                Ok(_) => {
                    tracing::info!("Download OK!");
                    summary.succeeded.push(region.to_string());
                }
                Err(e) => {
                    let category = e.category();
                    match category {
                        ErrorCategory::Network => tracing::error!(
                            region,
                            error = %e,
                            "Download failed (no connection or wrong URL?)."
                        ),
                        ErrorCategory::Other => {
                            tracing::error!(region, error = %e, "Download failed.");
                        }
                    }
                    summary.failed.push(FailedRegion {
                        region: region.to_string(),
                        category,
                        message: e.to_string(),
                    });
                }
            }
        }

        summary
    }
}
