//! # docsvc-core
//!
//! Core crate for the document service. Contains the environment-driven
//! configuration, the unified error system, the query-parameter builder
//! used by every list endpoint, the declarative validator, and the JSON
//! response envelopes.
//!
//! This crate has **no** internal dependencies on other service crates.

pub mod config;
pub mod error;
pub mod parameter;
pub mod response;
pub mod result;
pub mod validation;

pub use error::{AppError, ErrorKind, FieldError};
pub use result::AppResult;
