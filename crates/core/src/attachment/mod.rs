//! Attachment handling for form uploads.
//!
//! This module provides:
//! - Content type and size checks against the upload limits
//! - Copying the upload into a uniquely named temporary file
//! - Scoped ownership of that file, removed when the request is done

mod error;
mod service;
mod types;

pub use error::AttachmentError;
pub use service::AttachmentHandler;
pub use types::{StoredAttachment, Upload};
