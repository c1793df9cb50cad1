//! Integration tests for the batch downloader through the public API,
//! with the network replaced by a scripted backend.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use osmkit_download::{
    BoundingBox, DownloadError, DownloadResult, DownloaderConfig, ErrorCategory, HttpBackend,
    RegionDownloader, RetrievalMetadata,
};
use url::Url;

/// Replays one scripted outcome per request and records the URLs asked for.
struct ScriptedBackend {
    outcomes: RefCell<VecDeque<DownloadResult<Vec<u8>>>>,
    seen: RefCell<Vec<Url>>,
}

impl ScriptedBackend {
    fn new(outcomes: Vec<DownloadResult<Vec<u8>>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.borrow().iter().map(Url::to_string).collect()
    }
}

impl HttpBackend for ScriptedBackend {
    fn get(&self, url: &Url) -> DownloadResult<Vec<u8>> {
        self.seen.borrow_mut().push(url.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {url}"))
    }
}

fn bad_gateway(url: &str) -> DownloadError {
    DownloadError::HttpStatus {
        status: 502,
        url: url.to_string(),
    }
}

fn config_in(root: &Path) -> DownloaderConfig {
    DownloaderConfig::empty()
        .with_region("first", BoundingBox::new(10.0, 20.0, 10.5, 20.5))
        .with_region("second", BoundingBox::new(-1.25, 50.5, -1.0, 50.75))
        .with_region("third", BoundingBox::new(100.125, -5.5, 100.25, -5.25))
        .with_url_template("http://127.0.0.1:9/api/map?bbox={bbox}")
        .with_map_path_template(root.join("osm/{region}.osm").display().to_string())
        .with_meta_path_template(root.join("meta/{region}.json").display().to_string())
}

#[test]
fn one_request_per_region_in_table_order() {
    let dir = tempfile::tempdir().unwrap();
    let backend = ScriptedBackend::new(vec![
        Ok(b"first".to_vec()),
        Ok(b"second".to_vec()),
        Ok(b"third".to_vec()),
    ]);
    let downloader = RegionDownloader::new(config_in(dir.path()), &backend);

    let summary = downloader.download_all();

    assert!(summary.is_complete());
    assert_eq!(summary.succeeded, vec!["first", "second", "third"]);
    assert_eq!(
        backend.seen(),
        vec![
            "http://127.0.0.1:9/api/map?bbox=10.0,20.0,10.5,20.5",
            "http://127.0.0.1:9/api/map?bbox=-1.25,50.5,-1.0,50.75",
            "http://127.0.0.1:9/api/map?bbox=100.125,-5.5,100.25,-5.25",
        ]
    );
    for region in ["first", "second", "third"] {
        let body = std::fs::read(dir.path().join(format!("osm/{region}.osm"))).unwrap();
        assert_eq!(body, region.as_bytes());
    }
}

#[test]
fn simulated_network_failure_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let backend = ScriptedBackend::new(vec![
        Ok(b"first".to_vec()),
        Err(bad_gateway("http://127.0.0.1:9/")),
        Ok(b"third".to_vec()),
    ]);
    let downloader = RegionDownloader::new(config_in(dir.path()), &backend);

    let summary = downloader.download_all();

    assert_eq!(backend.seen().len(), 3);
    assert_eq!(summary.succeeded, vec!["first", "third"]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].region, "second");
    assert_eq!(summary.failed[0].category, ErrorCategory::Network);
    assert!(!dir.path().join("osm/second.osm").exists());
    assert!(!dir.path().join("meta/second.json").exists());
}

#[test]
fn metadata_file_matches_returned_record() {
    let dir = tempfile::tempdir().unwrap();
    let backend = ScriptedBackend::new(vec![Ok(b"<osm/>".to_vec())]);
    let downloader =
        RegionDownloader::new(config_in(dir.path()), &backend).with_build_id("osmkit 9.9.9");

    let returned = downloader.download_regions(&["second"]);
    assert!(returned.is_complete());

    let text = std::fs::read_to_string(dir.path().join("meta/second.json")).unwrap();
    let meta: RetrievalMetadata = serde_json::from_str(&text).unwrap();
    assert_eq!(meta.region, "second");
    assert_eq!(meta.source, "http://127.0.0.1:9/api/map?bbox=-1.25,50.5,-1.0,50.75");
    assert_eq!(meta.bounding_box, BoundingBox::new(-1.25, 50.5, -1.0, 50.75));
    assert_eq!(meta.build, "osmkit 9.9.9");

    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(raw["Retrieval (UTC)"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn config_file_drives_the_downloader() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("osmkit.json");
    let config = serde_json::json!({
        "regions": { "only": [1.0, 2.0, 3.0, 4.0] },
        "url_template": "https://maps.example.org/map?bbox={bbox}",
        "map_path_template": dir.path().join("{region}.osm").display().to_string(),
        "meta_path_template": dir.path().join("{region}_meta.txt").display().to_string(),
    });
    std::fs::write(&config_path, config.to_string()).unwrap();

    let config = DownloaderConfig::from_json_file(&config_path).unwrap();
    let backend = ScriptedBackend::new(vec![Ok(b"x".to_vec())]);
    let summary = RegionDownloader::new(config, &backend).download_all();

    assert_eq!(summary.succeeded, vec!["only"]);
    assert_eq!(backend.seen(), vec!["https://maps.example.org/map?bbox=1.0,2.0,3.0,4.0"]);
    assert!(dir.path().join("only_meta.txt").exists());
}
