//! # docsvc-grpc
//!
//! gRPC transport of the document service: the `DocumentCategoryService`,
//! the standard health service, server reflection, panic recovery and call
//! logging.

pub mod handler;
pub mod layer;
pub mod presenter;
pub mod server;
pub mod status;

/// Generated `documentcategory.v1` types.
pub mod pb {
    tonic::include_proto!("documentcategory.v1");

    /// Encoded descriptors for server reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("documentcategory_descriptor");
}

pub use handler::DocumentCategoryHandler;
pub use server::serve;
