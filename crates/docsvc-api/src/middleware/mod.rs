//! Request middleware.

pub mod logging;
pub mod masking;
pub mod recovery;
pub mod referer;
