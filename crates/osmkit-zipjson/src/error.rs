//! Error types for envelope encoding and decoding.

use thiserror::Error;

/// Result type alias for codec operations.
pub type ZipJsonResult<T> = Result<T, ZipJsonError>;

/// Coarse classification of a [`ZipJsonError`].
///
/// Only [`ErrorKind::Format`] is suppressible (via `insist = false`); the
/// other kinds are always fatal to the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a well-formed envelope.
    Format,
    /// The payload could not be base64-decoded or decompressed.
    Decode,
    /// The decompressed payload is not valid JSON.
    Parse,
    /// The input value could not be serialized to JSON.
    Serialize,
}

/// Errors raised by [`zip`](crate::zip) and [`unzip`](crate::unzip).
#[derive(Debug, Error)]
pub enum ZipJsonError {
    /// The value does not have the single-key envelope shape.
    #[error("JSON not in the expected format {{\"base64(zip(o))\": zipstring}}")]
    Format,

    /// The payload is truthy but not a string.
    #[error("Could not decode the contents: payload is not a string")]
    PayloadNotString,

    /// The payload is not valid standard base64.
    #[error("Could not decode the contents: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid zlib stream.
    #[error("Could not unzip the contents: {0}")]
    Inflate(#[source] std::io::Error),

    /// The decompressed bytes are not valid JSON.
    #[error("Could not interpret the unzipped contents: {0}")]
    Parse(#[source] serde_json::Error),

    /// The value to zip could not be serialized.
    #[error("Could not serialize the value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The serialized value could not be compressed.
    #[error("Could not zip the contents: {0}")]
    Deflate(#[source] std::io::Error),
}

impl ZipJsonError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format => ErrorKind::Format,
            Self::PayloadNotString | Self::Base64(_) | Self::Inflate(_) => ErrorKind::Decode,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Serialize(_) | Self::Deflate(_) => ErrorKind::Serialize,
        }
    }
}
