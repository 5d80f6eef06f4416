//! Attachment handler implementation.

use std::ffi::OsStr;
use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tracing::debug;

use formalogix_shared::UploadConfig;

use super::error::AttachmentError;
use super::types::{StoredAttachment, Upload};

/// Accepts optional uploads and stores them in scoped temporary files.
#[derive(Debug, Clone)]
pub struct AttachmentHandler {
    config: UploadConfig,
}

impl AttachmentHandler {
    /// Create a new attachment handler.
    #[must_use]
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Maximum accepted attachment size in bytes.
    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.config.max_attachment_bytes
    }

    /// Accept an optional upload.
    ///
    /// Returns `Ok(None)` when there is nothing to store. Otherwise the body
    /// is copied to a new temporary file named `<prefix>XXXXXX.<ext>` whose
    /// lifetime is tied to the returned [`StoredAttachment`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Content type is not allowed
    /// - Declared or copied size exceeds the limit
    /// - The temporary file cannot be created or written
    ///
    /// No temporary file survives an error.
    pub async fn accept<R>(
        &self,
        upload: Option<Upload<R>>,
        prefix: &str,
    ) -> Result<Option<StoredAttachment>, AttachmentError>
    where
        R: AsyncRead + Unpin,
    {
        let Some(upload) = upload.filter(|u| !u.is_empty()) else {
            return Ok(None);
        };

        if !self.config.is_mime_type_allowed(&upload.content_type) {
            return Err(AttachmentError::unsupported_media_type(upload.content_type));
        }

        let max = self.max_bytes();
        if let Some(size) = upload.declared_size.filter(|&size| size > max) {
            return Err(AttachmentError::payload_too_large(size, max));
        }

        let temp = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(&extension_suffix(&upload.filename))
            .tempfile_in(&self.config.temp_dir)?;

        // From here on, returning early drops `temp` and removes the file.
        let mut file = tokio::fs::File::from_std(temp.as_file().try_clone()?);
        let mut body = upload.body.take(max.saturating_add(1));
        let copied = tokio::io::copy(&mut body, &mut file).await?;
        file.flush().await?;

        if copied > max {
            return Err(AttachmentError::payload_too_large(copied, max));
        }

        debug!(
            path = %temp.path().display(),
            size = copied,
            content_type = %upload.content_type,
            "Attachment stored"
        );

        Ok(Some(StoredAttachment::new(
            upload.filename,
            upload.content_type,
            copied,
            temp,
        )))
    }
}

/// `.ext` of the original filename when the extension is plain ASCII alphanumeric.
fn extension_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
