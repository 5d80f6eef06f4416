//! Multipart decoding for the intake forms.
//!
//! Text parts become [`Submission`] fields. The part named `file` (when it
//! carries a filename) becomes the optional upload. Its body is buffered in
//! memory up to the attachment limit so the form can be validated before
//! anything touches the disk. Bytes past the limit are counted and dropped.

use std::io::Cursor;

use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::http::StatusCode;
use tracing::debug;

use formalogix_core::attachment::{AttachmentError, Upload};
use formalogix_core::submission::Submission;
use formalogix_shared::AppError;

/// Multipart part name of the optional attachment.
pub const FILE_FIELD: &str = "file";

/// Client message for undecodable request bodies.
pub const INVALID_FORM_MESSAGE: &str = "Invalid form data";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upload whose body was buffered while decoding.
pub type BufferedUpload = Upload<Cursor<Vec<u8>>>;

/// One decoded intake request.
#[derive(Debug, Default)]
pub struct DecodedForm {
    /// Text fields.
    pub submission: Submission,
    /// First file part, if any.
    pub upload: Option<BufferedUpload>,
}

/// Decodes a multipart body.
///
/// The first value wins when a field name repeats, and only the first file
/// part is kept.
///
/// # Errors
///
/// Returns `PayloadTooLarge` when the request body limit trips and
/// `InvalidForm` for any other decoding failure.
pub async fn decode_form(
    mut multipart: Multipart,
    max_file_bytes: u64,
) -> Result<DecodedForm, AppError> {
    let mut form = DecodedForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e, max_file_bytes))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == FILE_FIELD && field.file_name().is_some() {
            let upload = read_upload(field, max_file_bytes).await?;
            if form.upload.is_none() {
                form.upload = Some(upload);
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| multipart_error(&e, max_file_bytes))?;
        if !form.submission.contains_field(&name) {
            form.submission.insert(name, value);
        }
    }

    Ok(form)
}

async fn read_upload(
    mut field: Field<'_>,
    max_file_bytes: u64,
) -> Result<BufferedUpload, AppError> {
    let filename = field.file_name().unwrap_or_default().to_owned();
    let content_type = field
        .content_type()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_owned();

    let mut body = Vec::new();
    let mut size: u64 = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(&e, max_file_bytes))?
    {
        size = size.saturating_add(u64::try_from(chunk.len()).unwrap_or(u64::MAX));
        if size <= max_file_bytes {
            body.extend_from_slice(&chunk);
        }
    }

    Ok(Upload {
        filename,
        content_type,
        declared_size: Some(size),
        body: Cursor::new(body),
    })
}

fn multipart_error(err: &MultipartError, max_file_bytes: u64) -> AppError {
    debug!(error = %err, status = %err.status(), "Multipart decoding failed");

    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        // The exact size is unknown once the body limit trips.
        return AttachmentError::payload_too_large(max_file_bytes.saturating_add(1), max_file_bytes)
            .into();
    }

    AppError::InvalidForm(INVALID_FORM_MESSAGE.to_string())
}
