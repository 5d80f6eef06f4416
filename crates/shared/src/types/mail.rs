//! Value types passed from rendering to delivery.

use std::path::PathBuf;

/// A fully rendered notification, ready for delivery.
///
/// Produced once per submission and consumed once by a [`Mailer`](crate::email::Mailer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    /// Subject line.
    pub subject: String,
    /// HTML body fragment.
    pub html: String,
    /// Submitter address, used as `Reply-To`.
    pub reply_to: String,
    /// Display name of the sender mailbox, e.g. "Formalogix Contact Form".
    pub sender_name: String,
    /// Uploaded file to send along, if any.
    pub attachment: Option<AttachmentRef>,
}

/// Reference to a stored attachment.
///
/// Borrows nothing: the file behind `path` stays owned by the request that
/// stored it and must outlive delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    /// Original filename as uploaded.
    pub filename: String,
    /// Declared content type.
    pub content_type: String,
    /// Location of the temporary copy.
    pub path: PathBuf,
}
