//! Command-line front end for osmkit.
//!
//! Parsing lives in [`parser`] and [`commands`], process setup in
//! [`bootstrap`], and the per-command work in [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Only the binary uses these directly
use dotenvy as _;

#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
