//! Downloader configuration.
//!
//! The region table, URL template and output path templates are carried in
//! an explicit [`DownloaderConfig`] handed to the downloader. Defaults match
//! the two Kaohsiung extracts the tool was first written for.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DownloadResult;
use crate::logged_file::LoggedFile;

/// Default Overpass map endpoint. `{bbox}` is replaced by `left,bottom,right,top`.
pub const DEFAULT_URL_TEMPLATE: &str = "https://overpass-api.de/api/map?bbox={bbox}";

/// Default location of the raw `.osm` file.
pub const DEFAULT_MAP_PATH_TEMPLATE: &str = "OUTPUT/maps/UV/{region}.osm";

/// Default location of the retrieval metadata record.
pub const DEFAULT_META_PATH_TEMPLATE: &str = "OUTPUT/maps/{region}_meta.txt";

/// A lon/lat rectangle: `[left, bottom, right, top]` in degrees.
///
/// `left < right` and `bottom < top` are expected but not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingBox {
    pub const fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([left, bottom, right, top]: [f64; 4]) -> Self {
        Self::new(left, bottom, right, top)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.left, bbox.bottom, bbox.right, bbox.top]
    }
}

/// Comma-joined in `left,bottom,right,top` order, the form the map API expects.
///
/// Whole degrees keep their fractional part (`120.0`, not `120`) so request
/// URLs match those issued by earlier versions of the tool.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?},{:?},{:?},{:?}",
            self.left, self.bottom, self.right, self.top
        )
    }
}

/// Region name to bounding box, iterated in insertion order.
pub type RegionTable = IndexMap<String, BoundingBox>;

/// Configuration for a [`RegionDownloader`](crate::RegionDownloader).
///
/// # Example
///
/// ```
/// use osmkit_download::{BoundingBox, DownloaderConfig};
///
/// let config = DownloaderConfig::empty()
///     .with_region("tiny", BoundingBox::new(0.0, 0.0, 0.1, 0.1))
///     .with_map_path_template("out/{region}.osm");
/// assert_eq!(config.regions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloaderConfig {
    regions: RegionTable,
    url_template: String,
    map_path_template: String,
    meta_path_template: String,
    /// Request timeout, fractional seconds in JSON; absent means wait indefinitely
    #[serde(rename = "timeout_secs", with = "timeout_secs")]
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self::empty()
            .with_region(
                "kaohsiung_small",
                BoundingBox::new(120.2206, 22.4827, 120.4308, 22.7578),
            )
            .with_region(
                "kaohsiung_large",
                BoundingBox::new(119.9377, 22.1645, 120.8084, 23.3347),
            )
    }
}

impl DownloaderConfig {
    /// Default templates with an empty region table.
    pub fn empty() -> Self {
        Self {
            regions: RegionTable::new(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            map_path_template: DEFAULT_MAP_PATH_TEMPLATE.to_string(),
            meta_path_template: DEFAULT_META_PATH_TEMPLATE.to_string(),
            timeout: None,
            user_agent: osmkit_build_info::USER_AGENT.to_string(),
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> DownloadResult<Self> {
        let text = LoggedFile::open(path)?.read_text()?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Add or replace a region. New regions go to the end of the table.
    #[must_use]
    pub fn with_region(mut self, name: impl Into<String>, bbox: BoundingBox) -> Self {
        self.regions.insert(name.into(), bbox);
        self
    }

    /// Replace the whole region table.
    #[must_use]
    pub fn with_regions(mut self, regions: RegionTable) -> Self {
        self.regions = regions;
        self
    }

    /// Set the request URL template. Must contain `{bbox}`.
    #[must_use]
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }

    /// Set the raw map output path template. Should contain `{region}`.
    #[must_use]
    pub fn with_map_path_template(mut self, template: impl Into<String>) -> Self {
        self.map_path_template = template.into();
        self
    }

    /// Set the metadata output path template. Should contain `{region}`.
    #[must_use]
    pub fn with_meta_path_template(mut self, template: impl Into<String>) -> Self {
        self.meta_path_template = template.into();
        self
    }

    /// Set a request timeout. `None` waits indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub const fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Look up a region's bounding box.
    pub fn region(&self, name: &str) -> Option<BoundingBox> {
        self.regions.get(name).copied()
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn map_path_template(&self) -> &str {
        &self.map_path_template
    }

    pub fn meta_path_template(&self) -> &str {
        &self.meta_path_template
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// `Option<Duration>` as optional fractional seconds.
mod timeout_secs {
    use std::time::Duration;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(timeout: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        timeout.map(|t| t.as_secs_f64()).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Option::<f64>::deserialize(d)?
            .map(|secs| Duration::try_from_secs_f64(secs).map_err(D::Error::custom))
            .transpose()
    }
}
