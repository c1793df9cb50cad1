//! HTTP backend abstraction.
//!
//! The downloader only needs "GET this URL, give me the body". Putting that
//! behind [`HttpBackend`] keeps the batch loop testable without a network.

use url::Url;

use crate::config::DownloaderConfig;
use crate::error::{DownloadError, DownloadResult};

/// Blocking HTTP fetch of a whole response body.
pub trait HttpBackend {
    /// Issue one GET request and return the full body.
    ///
    /// Non-success statuses are errors in the network category.
    fn get(&self, url: &Url) -> DownloadResult<Vec<u8>>;
}

impl<T: HttpBackend + ?Sized> HttpBackend for &T {
    fn get(&self, url: &Url) -> DownloadResult<Vec<u8>> {
        (**self).get(url)
    }
}

impl<T: HttpBackend + ?Sized> HttpBackend for Box<T> {
    fn get(&self, url: &Url) -> DownloadResult<Vec<u8>> {
        (**self).get(url)
    }
}

/// Production backend using `reqwest::blocking`. No retries.
pub struct ReqwestBackend {
    client: reqwest::blocking::Client,
}

impl ReqwestBackend {
    /// Build a client from the downloader configuration.
    ///
    /// Without a configured timeout the request blocks until the transport
    /// gives up.
    pub fn new(config: &DownloaderConfig) -> DownloadResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { client })
    }
}

impl HttpBackend for ReqwestBackend {
    fn get(&self, url: &Url) -> DownloadResult<Vec<u8>> {
        let response = self.client.get(url.as_str()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
