//! Attachment error types.

use thiserror::Error;

use formalogix_shared::AppError;

/// Attachment handling errors.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// Content type outside the allow-list.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// File too large.
    #[error("file too large: {size} bytes exceeds maximum {max} bytes")]
    PayloadTooLarge {
        /// Observed file size (declared or copied).
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// Temporary file could not be created or written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl AttachmentError {
    /// Create an unsupported media type error.
    #[must_use]
    pub fn unsupported_media_type(content_type: impl Into<String>) -> Self {
        Self::UnsupportedMediaType(content_type.into())
    }

    /// Create a payload too large error.
    #[must_use]
    pub fn payload_too_large(size: u64, max: u64) -> Self {
        Self::PayloadTooLarge { size, max }
    }
}

impl From<AttachmentError> for AppError {
    fn from(err: AttachmentError) -> Self {
        match err {
            AttachmentError::UnsupportedMediaType(_) => {
                Self::UnsupportedMediaType("Invalid file type. Only PDF, JPG, PNG allowed".into())
            }
            AttachmentError::PayloadTooLarge { max, .. } => Self::PayloadTooLarge(format!(
                "File too large. Maximum {}MB",
                max / (1024 * 1024)
            )),
            AttachmentError::Storage(e) => Self::Storage(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages() {
        let err: AppError = AttachmentError::unsupported_media_type("application/zip").into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.public_message("generic"),
            "Invalid file type. Only PDF, JPG, PNG allowed"
        );

        let err: AppError = AttachmentError::payload_too_large(11 << 20, 10 << 20).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message("generic"), "File too large. Maximum 10MB");
    }

    #[test]
    fn test_storage_is_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only fs");
        let err: AppError = AttachmentError::from(io).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message("Failed to process file"), "Failed to process file");
    }
}
