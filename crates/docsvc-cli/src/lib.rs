//! # docsvc-cli
//!
//! Command definitions for the document service binary. Running without a
//! subcommand migrates the database and serves the HTTP API.

pub mod commands;
pub mod output;
pub mod shutdown;

pub use commands::{Cli, Commands};
