//! Error types for region downloads.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// The two failure categories the batch loop distinguishes when logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No connection, bad URL, or a non-success HTTP status.
    Network,
    /// Everything else (lookup, filesystem, serialization).
    Other,
}

/// Errors raised while downloading a single region.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The region is not in the configured table.
    #[error("Region '{region}' is not configured")]
    UnknownRegion {
        /// The name that was looked up
        region: String,
    },

    /// The URL template rendered to something that is not a URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The rendered URL text
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Filesystem error on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being created or written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata record could not be written as JSON.
    #[error("Failed to write metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl DownloadError {
    /// Build an [`DownloadError::Io`] for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Which log message the batch loop uses for this failure.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUrl { .. } | Self::Network(_) | Self::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            Self::UnknownRegion { .. } | Self::Io { .. } | Self::Metadata(_) => {
                ErrorCategory::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_message() {
        let err = DownloadError::UnknownRegion {
            region: "atlantis".to_string(),
        };
        assert!(err.to_string().contains("atlantis"));
        assert_eq!(err.category(), ErrorCategory::Other);
    }

    #[test]
    fn invalid_url_is_a_network_failure() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = DownloadError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn http_status_is_a_network_failure() {
        let err = DownloadError::HttpStatus {
            status: 504,
            url: "https://overpass-api.de/api/map?bbox=1,2,3,4".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        let msg = err.to_string();
        assert!(msg.contains("504"));
        assert!(msg.contains("overpass-api.de"));
    }

    #[test]
    fn io_error_names_the_path() {
        let err = DownloadError::io(
            "OUTPUT/maps/UV/x.osm",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.category(), ErrorCategory::Other);
        assert!(err.to_string().contains("OUTPUT/maps/UV/x.osm"));
    }
}
