//! Download command handler.

use anyhow::Result;
use osmkit_download::{
    BatchSummary, DownloaderConfig, HttpBackend, RegionDownloader, ReqwestBackend,
};

/// Run the batch download over `regions`, or over every configured region
/// when `regions` is empty.
///
/// Per-region failures are logged, not returned; only failing to build the
/// HTTP client is an error.
pub fn execute(config: DownloaderConfig, regions: &[String]) -> Result<()> {
    let backend = ReqwestBackend::new(&config)?;
    run(config, backend, regions);
    Ok(())
}

fn run<B: HttpBackend>(config: DownloaderConfig, backend: B, regions: &[String]) -> BatchSummary {
    let downloader = RegionDownloader::new(config, backend);

    let summary = if regions.is_empty() {
        downloader.download_all()
    } else {
        downloader.download_regions(regions)
    };

    tracing::info!(
        succeeded = summary.succeeded.len(),
        failed = summary.failed.len(),
        "Batch finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use osmkit_download::{BoundingBox, DownloadError, DownloadResult, Url};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Offline {
        requested: RefCell<Vec<String>>,
    }

    impl HttpBackend for Offline {
        fn get(&self, url: &Url) -> DownloadResult<Vec<u8>> {
            self.requested.borrow_mut().push(url.to_string());
            Err(DownloadError::HttpStatus {
                status: 503,
                url: url.to_string(),
            })
        }
    }

    fn config_in(root: &std::path::Path) -> DownloaderConfig {
        DownloaderConfig::default()
            .with_region("extra", BoundingBox::new(0.0, 0.0, 1.0, 1.0))
            .with_map_path_template(root.join("{region}.osm").display().to_string())
            .with_meta_path_template(root.join("{region}.json").display().to_string())
    }

    #[test]
    fn empty_selection_runs_every_region() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Offline::default();

        let summary = run(config_in(dir.path()), &backend, &[]);

        assert_eq!(summary.failed.len(), 3);
        assert_eq!(backend.requested.borrow().len(), 3);
    }

    #[test]
    fn named_selection_runs_only_those_regions() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Offline::default();

        let summary = run(config_in(dir.path()), &backend, &["extra".to_string()]);

        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].region, "extra");
        assert_eq!(
            *backend.requested.borrow(),
            ["https://overpass-api.de/api/map?bbox=0.0,0.0,1.0,1.0"]
        );
    }
}
