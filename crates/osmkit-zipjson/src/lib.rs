//! Compress a JSON value into a base64 zlib envelope and back.
//!
//! An envelope is a JSON object with exactly one key, [`ZIPJSON_KEY`], whose
//! value is the base64 text of the zlib-compressed JSON document:
//!
//! ```text
//! {"base64(zip(o))": "eJyrVkpUslJQclTSUVBKArGclGoBLeoETw=="}
//! ```
//!
//! All functions are pure and hold no state.

#![deny(unsafe_code)]

mod codec;
mod envelope;
mod error;
mod text;

pub use codec::{unzip, unzip_as, unzip_with, zip};
pub use envelope::{Envelope, ZIPJSON_KEY};
pub use error::{ErrorKind, ZipJsonError, ZipJsonResult};
