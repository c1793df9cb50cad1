//! URL and output path construction.
//!
//! Pure functions, so every request and output location can be checked
//! without touching the network or the filesystem.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use url::Url;

use crate::config::{BoundingBox, DownloaderConfig};
use crate::error::{DownloadError, DownloadResult};

const BBOX_PLACEHOLDER: &str = "{bbox}";
const REGION_PLACEHOLDER: &str = "{region}";

/// Substitute `{bbox}` with `left,bottom,right,top` and parse the result.
pub fn render_url(template: &str, bbox: BoundingBox) -> DownloadResult<Url> {
    let url = template.replace(BBOX_PLACEHOLDER, &bbox.to_string());
    Url::parse(&url).map_err(|source| DownloadError::InvalidUrl { url, source })
}

/// Substitute `{region}` in a path template.
pub fn render_path(template: &str, region: &str) -> PathBuf {
    PathBuf::from(template.replace(REGION_PLACEHOLDER, region))
}

/// Every directory the configured outputs will be written into.
///
/// Both path templates are rendered for each region; the parents are
/// deduplicated and returned in first-seen order.
pub fn output_dirs(config: &DownloaderConfig) -> Vec<PathBuf> {
    let templates = [config.map_path_template(), config.meta_path_template()];

    let dirs: IndexSet<PathBuf> = templates
        .iter()
        .flat_map(|template| {
            config
                .regions()
                .keys()
                .map(move |region| render_path(template, region))
        })
        .filter_map(|path| path.parent().map(Path::to_path_buf))
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();

    dirs.into_iter().collect()
}
