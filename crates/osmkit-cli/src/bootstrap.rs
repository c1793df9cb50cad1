//! Logging and configuration setup for the CLI.

use std::path::Path;

use anyhow::{Context, Result};
use osmkit_download::DownloaderConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
/// Logs go to stderr so codec output on stdout stays clean.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the downloader configuration, falling back to the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<DownloaderConfig> {
    let Some(path) = path else {
        return Ok(DownloaderConfig::default());
    };

    tracing::debug!(path = %path.display(), "Loading configuration");
    DownloaderConfig::from_json_file(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_a_path() {
        assert_eq!(load_config(None).unwrap(), DownloaderConfig::default());
    }

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("osmkit.json");
        std::fs::write(&path, r#"{"regions": {"x": [0.0, 1.0, 2.0, 3.0]}}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.regions().len(), 1);
        assert!(config.region("x").is_some());
    }

    #[test]
    fn bad_json_mentions_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
