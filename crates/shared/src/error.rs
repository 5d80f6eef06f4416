//! Application-wide error types.

use thiserror::Error;

/// Client message for temporary file failures.
pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to process file";

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Client errors carry the message shown to the submitter. Server errors
/// carry diagnostic detail that is logged and never returned to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed required field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Attachment content type outside the allow-list.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Attachment larger than the configured maximum.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Request body could not be decoded as a multipart form.
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Temporary attachment file could not be created or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// SMTP delivery failed.
    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_)
            | Self::UnsupportedMediaType(_)
            | Self::PayloadTooLarge(_)
            | Self::InvalidForm(_) => 400,
            Self::Storage(_) | Self::Delivery(_) => 500,
        }
    }

    /// Returns the error code for API responses and logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Delivery(_) => "DELIVERY_ERROR",
        }
    }

    /// Whether the submitter caused this error.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// Message safe to return to the submitter.
    ///
    /// Delivery failures collapse to `generic`, the form-specific failure text.
    #[must_use]
    pub fn public_message<'a>(&'a self, generic: &'a str) -> &'a str {
        match self {
            Self::Validation(msg)
            | Self::UnsupportedMediaType(msg)
            | Self::PayloadTooLarge(msg)
            | Self::InvalidForm(msg) => msg,
            Self::Storage(_) => STORAGE_FAILURE_MESSAGE,
            Self::Delivery(_) => generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::UnsupportedMediaType(String::new()).status_code(), 400);
        assert_eq!(AppError::PayloadTooLarge(String::new()).status_code(), 400);
        assert_eq!(AppError::InvalidForm(String::new()).status_code(), 400);
        assert_eq!(AppError::Storage(String::new()).status_code(), 500);
        assert_eq!(AppError::Delivery(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::UnsupportedMediaType(String::new()).error_code(),
            "UNSUPPORTED_MEDIA_TYPE"
        );
        assert_eq!(
            AppError::PayloadTooLarge(String::new()).error_code(),
            "PAYLOAD_TOO_LARGE"
        );
        assert_eq!(AppError::InvalidForm(String::new()).error_code(), "INVALID_FORM");
        assert_eq!(AppError::Storage(String::new()).error_code(), "STORAGE_ERROR");
        assert_eq!(AppError::Delivery(String::new()).error_code(), "DELIVERY_ERROR");
    }

    #[test]
    fn test_public_message_hides_server_detail() {
        let generic = "Failed to send email";

        let err = AppError::Delivery("535 5.7.8 authentication failed".into());
        assert_eq!(err.public_message(generic), generic);
        assert!(!err.is_client_error());

        let err = AppError::Storage("No space left on device".into());
        assert_eq!(err.public_message(generic), "Failed to process file");

        let err = AppError::Validation("Invalid email format".into());
        assert_eq!(err.public_message(generic), "Invalid email format");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::Delivery("msg".into()).to_string(),
            "Delivery error: msg"
        );
    }
}
