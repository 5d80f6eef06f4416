//! Attachment types and data structures.

use std::path::Path;

use tempfile::NamedTempFile;
use tracing::warn;

use formalogix_shared::AttachmentRef;

/// An uploaded file as received from the client, not yet stored.
#[derive(Debug)]
pub struct Upload<R> {
    /// Original filename.
    pub filename: String,
    /// Declared MIME type.
    pub content_type: String,
    /// Size claimed by the client or observed while decoding, if known.
    pub declared_size: Option<u64>,
    /// File content.
    pub body: R,
}

impl<R> Upload<R> {
    /// An empty file input: no filename and no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filename.is_empty() && self.declared_size == Some(0)
    }
}

/// An accepted attachment backed by a temporary file.
///
/// The temporary file lives exactly as long as this value. Dropping it, on any
/// exit path, removes the file.
#[derive(Debug)]
pub struct StoredAttachment {
    filename: String,
    content_type: String,
    size: u64,
    file: NamedTempFile,
}

impl StoredAttachment {
    pub(crate) fn new(
        filename: String,
        content_type: String,
        size: u64,
        file: NamedTempFile,
    ) -> Self {
        Self {
            filename,
            content_type,
            size,
            file,
        }
    }

    /// Original filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Declared MIME type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Number of bytes stored.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Location of the temporary copy.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reference handed to rendering and delivery.
    #[must_use]
    pub fn to_ref(&self) -> AttachmentRef {
        AttachmentRef {
            filename: self.filename.clone(),
            content_type: self.content_type.clone(),
            path: self.file.path().to_path_buf(),
        }
    }

    /// Removes the temporary file now, logging a failed removal.
    pub fn release(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!(path = %path.display(), error = %e, "Failed to remove temporary attachment");
        }
    }
}
