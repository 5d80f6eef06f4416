//! Required-field and email checks for submissions.

use thiserror::Error;

use formalogix_shared::AppError;

use super::form::FormDescriptor;
use super::types::Submission;

/// Validation errors for submissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty. Carries the form's message.
    #[error("{0}")]
    MissingRequired(&'static str),

    /// The email address does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Validates a submission against its form's required fields.
///
/// Runs before any attachment handling and performs no I/O.
///
/// # Errors
///
/// Returns an error if a required field is missing or the email is malformed.
pub fn validate(form: &FormDescriptor, submission: &Submission) -> Result<(), ValidationError> {
    if form
        .required_fields
        .iter()
        .any(|field| submission.get(field).is_none())
    {
        return Err(ValidationError::MissingRequired(form.required_message));
    }

    if !is_valid_email(submission.email()) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Checks the `local@domain.tld` shape.
///
/// No whitespace anywhere, exactly one `@` with a non-empty local part, and a
/// domain containing a `.` that is neither its first nor its last character.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
