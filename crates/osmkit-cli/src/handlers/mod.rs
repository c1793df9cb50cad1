//! Command handlers.
//!
//! Each handler is a thin wrapper: read CLI input, call into the library
//! crates, print the result.

pub mod codec;
pub mod download;
pub mod regions;
