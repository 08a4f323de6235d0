//! Filestore drivers.

#[cfg(feature = "gcs")]
pub mod gcs;
pub mod local;
#[cfg(feature = "s3")]
pub mod s3;

#[cfg(feature = "gcs")]
pub use gcs::GcsFilestore;
pub use local::LocalFilestore;
#[cfg(feature = "s3")]
pub use s3::S3Filestore;
