//! Build/version metadata shared across osmkit frontends.
//!
//! The downloader stamps [`BUILD_ID`] into every retrieval metadata record so
//! a map extract can be traced back to the binary that fetched it.

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// The git SHA emitted by the build script.
///
/// A 7-character hex string when available, otherwise `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// True if the git SHA looks like a short hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const LONG_VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string used by CLI `--version` output.
///
/// Examples:
/// - `0.1.0 (a1b2c3d)`
/// - `0.1.0` (when git data is unavailable)
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    LONG_VERSION_WITH_SHA
} else {
    SEMVER
};

const BUILD_ID_WITH_SHA: &str = concat!(
    "osmkit ",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);

const BUILD_ID_PLAIN: &str = concat!("osmkit ", env!("CARGO_PKG_VERSION"));

/// Identifier recorded in retrieval metadata, e.g. `osmkit 0.1.0 (a1b2c3d)`.
pub const BUILD_ID: &str = if HAS_GIT_SHA {
    BUILD_ID_WITH_SHA
} else {
    BUILD_ID_PLAIN
};

/// Default `User-Agent` for outgoing HTTP requests.
pub const USER_AGENT: &str = concat!("osmkit/", env!("CARGO_PKG_VERSION"));

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < 7 {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}
