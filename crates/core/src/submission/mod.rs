//! Submissions, form descriptors, and validation.

mod form;
mod types;
mod validation;

#[cfg(test)]
mod validation_props;

pub use form::{
    CONTACT_FORM, Cell, FormDescriptor, FormKind, OFFER_REQUEST_FORM, Row, Section,
    SubjectTemplate,
};
pub use types::{Submission, fields};
pub use validation::{ValidationError, is_valid_email, validate};
