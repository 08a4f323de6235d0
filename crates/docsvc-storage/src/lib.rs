//! # docsvc-storage
//!
//! Filestore drivers for the document service. Every driver implements the
//! [`Filestore`] trait over object paths; [`create_filestore`] picks one from
//! `STORAGE_DRIVER`.

pub mod factory;
pub mod filestore;
pub mod object;
pub mod path;
pub mod providers;
mod signed_url;

pub use factory::create_filestore;
pub use filestore::Filestore;
pub use object::{ObjectMetadata, PutMethod};
