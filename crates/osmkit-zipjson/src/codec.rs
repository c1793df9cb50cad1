//! `zip` / `unzip` transforms.

use std::io::{Read, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::{ZipJsonError, ZipJsonResult};
use crate::text::to_payload_text;

/// Compress `value` into a single-key envelope.
///
/// The value is serialized to JSON text with spaced separators and ASCII-only
/// escapes, zlib-compressed at the default level and base64-encoded with the
/// standard padded alphabet.
///
/// ```
/// use osmkit_zipjson::{ZIPJSON_KEY, zip};
/// use serde_json::json;
///
/// let envelope = zip(&json!({"a": "A", "b": "B"})).unwrap();
/// assert!(envelope[ZIPJSON_KEY].is_string());
/// ```
pub fn zip<T: Serialize + ?Sized>(value: &T) -> ZipJsonResult<Value> {
    let text = to_payload_text(value).map_err(ZipJsonError::Serialize)?;
    let compressed = deflate(&text).map_err(ZipJsonError::Deflate)?;
    Ok(Envelope::new(STANDARD.encode(compressed)).into_value())
}

/// Reverse [`zip`], rejecting anything that is not a well-formed envelope.
///
/// Equivalent to `unzip_with(value, true)`.
pub fn unzip(value: Value) -> ZipJsonResult<Value> {
    unzip_with(value, true)
}

/// Reverse [`zip`].
///
/// When `insist` is false, a value that does not have the envelope shape is
/// returned unchanged instead of failing. Decode and parse failures are
/// errors either way.
pub fn unzip_with(value: Value, insist: bool) -> ZipJsonResult<Value> {
    let Some(envelope) = Envelope::from_value(&value) else {
        return if insist {
            Err(ZipJsonError::Format)
        } else {
            Ok(value)
        };
    };

    let bytes = decode_payload(&envelope)?;
    serde_json::from_slice(&bytes).map_err(ZipJsonError::Parse)
}

/// Decode an envelope straight into `T`.
///
/// Always strict: a malformed envelope is a format error.
pub fn unzip_as<T: DeserializeOwned>(value: &Value) -> ZipJsonResult<T> {
    let envelope = Envelope::from_value(value).ok_or(ZipJsonError::Format)?;
    let bytes = decode_payload(&envelope)?;
    serde_json::from_slice(&bytes).map_err(ZipJsonError::Parse)
}

fn decode_payload(envelope: &Envelope) -> ZipJsonResult<Vec<u8>> {
    let text = envelope
        .payload()
        .as_str()
        .ok_or(ZipJsonError::PayloadNotString)?;
    let compressed = STANDARD.decode(text)?;
    inflate(&compressed).map_err(ZipJsonError::Inflate)
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

fn inflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}
