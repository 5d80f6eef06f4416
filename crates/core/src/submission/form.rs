//! Form descriptors driving the generic intake pipeline.
//!
//! Both intake endpoints share one pipeline. Everything that differs between
//! them (required fields, subject line, table layout, response messages) is
//! data in a [`FormDescriptor`].

use super::types::fields;

/// Which intake form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// General contact form.
    Contact,
    /// Pricing-calculator offer request.
    OfferRequest,
}

impl FormKind {
    /// Stable identifier for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::OfferRequest => "offer_request",
        }
    }

    /// The descriptor for this form.
    #[must_use]
    pub fn descriptor(&self) -> &'static FormDescriptor {
        match self {
            Self::Contact => &CONTACT_FORM,
            Self::OfferRequest => &OFFER_REQUEST_FORM,
        }
    }
}

/// Static description of one intake form.
#[derive(Debug)]
pub struct FormDescriptor {
    /// Form identity.
    pub kind: FormKind,
    /// Fields that must be present and non-empty.
    pub required_fields: &'static [&'static str],
    /// Message returned when a required field is missing.
    pub required_message: &'static str,
    /// Subject line template.
    pub subject: SubjectTemplate,
    /// Display name of the sender mailbox.
    pub sender_name: &'static str,
    /// Body heading.
    pub heading: &'static str,
    /// Body tables, in order. The attachment row joins the last one.
    pub sections: &'static [Section],
    /// Trusted HTML appended after the tables.
    pub footer: Option<&'static str>,
    /// Prefix of temporary attachment files.
    pub upload_prefix: &'static str,
    /// Response message on successful delivery.
    pub success_message: &'static str,
    /// Response message on server-side failure.
    pub failure_message: &'static str,
}

/// Subject line: `prefix + display name [+ " (<count> <unit>)"]`.
#[derive(Debug)]
pub struct SubjectTemplate {
    /// Leading text, e.g. "New Contact: ".
    pub prefix: &'static str,
    /// Field appended as a grouped count when it parses as an integer.
    pub count_field: Option<&'static str>,
    /// Unit following the count.
    pub count_unit: &'static str,
}

/// A titled key/value table in the email body.
#[derive(Debug)]
pub struct Section {
    /// Optional `<h3>` title.
    pub title: Option<&'static str>,
    /// Rows in display order.
    pub rows: &'static [Row],
}

/// One key/value row.
#[derive(Debug)]
pub struct Row {
    /// Label cell text.
    pub label: &'static str,
    /// How the value cell is produced.
    pub cell: Cell,
}

/// How a value cell is rendered from the submission.
#[derive(Debug)]
pub enum Cell {
    /// Plain text, or `placeholder` when absent.
    Text {
        /// Source field.
        field: &'static str,
        /// Shown when the field is absent.
        placeholder: &'static str,
    },
    /// Clickable link, or `placeholder` when absent.
    Link {
        /// Source field.
        field: &'static str,
        /// Shown when the field is absent.
        placeholder: &'static str,
    },
    /// `mailto:` link.
    Mailto {
        /// Source field.
        field: &'static str,
    },
    /// Integer rendered in grouped-thousands notation; other text verbatim.
    Count {
        /// Source field.
        field: &'static str,
        /// Shown when the field is absent.
        placeholder: &'static str,
    },
    /// Service token list translated to display names.
    Services {
        /// Source field.
        field: &'static str,
    },
    /// Value followed by `(detail)` when the detail field is present.
    WithDetail {
        /// Source field.
        field: &'static str,
        /// Parenthesized companion field.
        detail: &'static str,
        /// Shown when the main field is absent.
        placeholder: &'static str,
    },
    /// Bold amount followed by its unit.
    Amount {
        /// Amount field.
        field: &'static str,
        /// Amount when absent.
        default: &'static str,
        /// Unit field.
        unit: &'static str,
        /// Unit when absent.
        unit_default: &'static str,
    },
    /// Pre-wrapped free text. The whole row is omitted when absent.
    Message {
        /// Source field.
        field: &'static str,
    },
}

const NOT_PROVIDED: &str = "Not provided";
const NOT_SELECTED: &str = "Not selected";
const NOT_SPECIFIED: &str = "Not specified";

/// General contact form.
pub static CONTACT_FORM: FormDescriptor = FormDescriptor {
    kind: FormKind::Contact,
    required_fields: &[fields::EMAIL, fields::MESSAGE],
    required_message: "Email and message are required",
    subject: SubjectTemplate {
        prefix: "New Contact: ",
        count_field: None,
        count_unit: "",
    },
    sender_name: "Formalogix Contact Form",
    heading: "New Contact Form Submission",
    sections: &[Section {
        title: None,
        rows: &[
            Row {
                label: "Company",
                cell: Cell::Text {
                    field: fields::COMPANY,
                    placeholder: NOT_PROVIDED,
                },
            },
            Row {
                label: "Homepage",
                cell: Cell::Link {
                    field: fields::HOMEPAGE,
                    placeholder: NOT_PROVIDED,
                },
            },
            Row {
                label: "Name",
                cell: Cell::Text {
                    field: fields::NAME,
                    placeholder: NOT_PROVIDED,
                },
            },
            Row {
                label: "Email",
                cell: Cell::Mailto {
                    field: fields::EMAIL,
                },
            },
            Row {
                label: "Monthly Forms",
                cell: Cell::Count {
                    field: fields::FORM_COUNT,
                    placeholder: NOT_PROVIDED,
                },
            },
            Row {
                label: "Industry",
                cell: Cell::Text {
                    field: fields::INDUSTRY,
                    placeholder: NOT_SELECTED,
                },
            },
            Row {
                label: "Timeline",
                cell: Cell::Text {
                    field: fields::TIMELINE,
                    placeholder: NOT_SELECTED,
                },
            },
            Row {
                label: "Current Solution",
                cell: Cell::Text {
                    field: fields::CURRENT_SOLUTION,
                    placeholder: NOT_SELECTED,
                },
            },
            Row {
                label: "Message",
                cell: Cell::Message {
                    field: fields::MESSAGE,
                },
            },
        ],
    }],
    footer: None,
    upload_prefix: "contact-upload-",
    success_message: "Email sent successfully",
    failure_message: "Failed to send email",
};

/// Offer request submitted from the pricing calculator.
pub static OFFER_REQUEST_FORM: FormDescriptor = FormDescriptor {
    kind: FormKind::OfferRequest,
    required_fields: &[fields::EMAIL, fields::NAME],
    required_message: "Email and name are required",
    subject: SubjectTemplate {
        prefix: "New Offer Request: ",
        count_field: Some(fields::PAGES),
        count_unit: "pages",
    },
    sender_name: "Formalogix Offer Request",
    heading: "New Offer Request from Pricing Calculator",
    sections: &[
        Section {
            title: Some("Calculator Summary"),
            rows: &[
                Row {
                    label: "Number of Pages",
                    cell: Cell::Count {
                        field: fields::PAGES,
                        placeholder: NOT_SPECIFIED,
                    },
                },
                Row {
                    label: "Selected Services",
                    cell: Cell::Services {
                        field: fields::SERVICES,
                    },
                },
                Row {
                    label: "Estimated Cost",
                    cell: Cell::Amount {
                        field: fields::TOTAL_COST,
                        default: "0",
                        unit: fields::CURRENCY,
                        unit_default: "EUR",
                    },
                },
            ],
        },
        Section {
            title: Some("Document Details"),
            rows: &[
                Row {
                    label: "Page Size",
                    cell: Cell::WithDetail {
                        field: fields::PAGE_SIZE,
                        detail: fields::PAGE_SIZE_OTHER,
                        placeholder: NOT_SPECIFIED,
                    },
                },
                Row {
                    label: "Document Condition",
                    cell: Cell::Text {
                        field: fields::DOCUMENT_CONDITION,
                        placeholder: NOT_SPECIFIED,
                    },
                },
            ],
        },
        Section {
            title: Some("Business Context"),
            rows: &[
                Row {
                    label: "Industry",
                    cell: Cell::Text {
                        field: fields::INDUSTRY,
                        placeholder: NOT_SPECIFIED,
                    },
                },
                Row {
                    label: "Urgency",
                    cell: Cell::WithDetail {
                        field: fields::URGENCY,
                        detail: fields::URGENCY_DATE,
                        placeholder: NOT_SPECIFIED,
                    },
                },
            ],
        },
        Section {
            title: Some("Contact Information"),
            rows: &[
                Row {
                    label: "Company",
                    cell: Cell::Text {
                        field: fields::COMPANY,
                        placeholder: NOT_PROVIDED,
                    },
                },
                Row {
                    label: "Name",
                    cell: Cell::Text {
                        field: fields::NAME,
                        placeholder: NOT_PROVIDED,
                    },
                },
                Row {
                    label: "Email",
                    cell: Cell::Mailto {
                        field: fields::EMAIL,
                    },
                },
                Row {
                    label: "Phone",
                    cell: Cell::Text {
                        field: fields::PHONE,
                        placeholder: NOT_PROVIDED,
                    },
                },
                Row {
                    label: "Message",
                    cell: Cell::Message {
                        field: fields::MESSAGE,
                    },
                },
            ],
        },
    ],
    footer: Some(
        "<strong>Action Required:</strong> Respond within 24 hours with a detailed offer.",
    ),
    upload_prefix: "offer-upload-",
    success_message: "Offer request sent successfully",
    failure_message: "Failed to send offer request",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_resolves_descriptor() {
        assert_eq!(FormKind::Contact.descriptor().kind, FormKind::Contact);
        assert_eq!(
            FormKind::OfferRequest.descriptor().kind,
            FormKind::OfferRequest
        );
    }

    #[test]
    fn test_every_form_requires_email() {
        for form in [&CONTACT_FORM, &OFFER_REQUEST_FORM] {
            assert!(form.required_fields.contains(&fields::EMAIL));
            assert!(!form.sections.is_empty());
        }
    }

    #[test]
    fn test_upload_prefixes_differ() {
        assert_ne!(CONTACT_FORM.upload_prefix, OFFER_REQUEST_FORM.upload_prefix);
    }
}
