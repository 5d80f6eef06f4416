//! Email rendering for validated submissions.
//!
//! Rendering is a pure function of the form descriptor, the submission and
//! the optional attachment. The only I/O is a `stat` of the attachment to show
//! its size; if that fails the filename is shown alone.
//!
//! Every user-supplied value is HTML-escaped. Only static descriptor text
//! (headings, labels, footer) is written raw.

mod format;

#[cfg(test)]
mod format_props;
#[cfg(test)]
mod tests;

use std::fmt::Write;

use formalogix_shared::{AttachmentRef, RenderedEmail};

use crate::submission::{Cell, FormDescriptor, Submission};

pub use format::{
    escape_html, format_count, format_file_info, format_grouped, format_services,
};

const TABLE_STYLE: &str =
    "border-collapse: collapse; width: 100%; margin-bottom: 16px; font-family: Arial, sans-serif;";
const LABEL_STYLE: &str = "padding: 12px; font-weight: bold; border: 1px solid #dee2e6;";
const VALUE_STYLE: &str = "padding: 12px; border: 1px solid #dee2e6;";
const SHADED_ROW_STYLE: &str = "background-color: #f8f9fa;";
const SECTION_TITLE_STYLE: &str = "color: #3b82f6; margin-top: 24px;";
const CALLOUT_STYLE: &str =
    "margin-top: 24px; padding: 12px; background-color: #f0f9ff; border-left: 4px solid #3b82f6;";

/// Renders the notification email for a validated submission.
#[must_use]
pub fn render(
    form: &FormDescriptor,
    submission: &Submission,
    attachment: Option<AttachmentRef>,
) -> RenderedEmail {
    RenderedEmail {
        subject: render_subject(form, submission),
        html: render_body(form, submission, attachment.as_ref()),
        reply_to: submission.email().to_string(),
        sender_name: form.sender_name.to_string(),
        attachment,
    }
}

/// Subject line: prefix, display name, and an optional grouped count.
#[must_use]
pub fn render_subject(form: &FormDescriptor, submission: &Submission) -> String {
    let mut subject = format!("{}{}", form.subject.prefix, submission.display_name());

    let count = form
        .subject
        .count_field
        .and_then(|field| submission.get(field))
        .and_then(|raw| raw.parse::<i64>().ok());
    if let Some(n) = count {
        let _ = write!(subject, " ({} {})", format_grouped(n), form.subject.count_unit);
    }

    subject
}

/// HTML body: heading, one table per section, optional footer.
#[must_use]
pub fn render_body(
    form: &FormDescriptor,
    submission: &Submission,
    attachment: Option<&AttachmentRef>,
) -> String {
    let mut html = String::with_capacity(4096);
    let _ = write!(html, "<h2>{}</h2>", form.heading);

    let last = form.sections.len().saturating_sub(1);
    for (index, section) in form.sections.iter().enumerate() {
        if let Some(title) = section.title {
            let _ = write!(html, r#"<h3 style="{SECTION_TITLE_STYLE}">{title}</h3>"#);
        }

        let mut table = Table::open(&mut html);
        for row in section.rows {
            if let Some(value) = render_cell(&row.cell, submission) {
                table.row(row.label, &value);
            }
        }
        if index == last
            && let Some(attachment) = attachment
        {
            table.row("Attachment", &Value::text(&attachment_info(attachment)));
        }
        table.close();
    }

    if let Some(footer) = form.footer {
        let _ = write!(html, r#"<p style="{CALLOUT_STYLE}">{footer}</p>"#);
    }

    html
}

/// Escaped value cell plus the extra styles it needs.
struct Value {
    html: String,
    label_style: &'static str,
    value_style: &'static str,
}

impl Value {
    fn text(raw: &str) -> Self {
        Self::markup(escape_html(raw).into_owned())
    }

    fn markup(html: String) -> Self {
        Self {
            html,
            label_style: "",
            value_style: "",
        }
    }
}

fn render_cell(cell: &Cell, submission: &Submission) -> Option<Value> {
    let value = match *cell {
        Cell::Text { field, placeholder } => Value::text(submission.get_or(field, placeholder)),
        Cell::Link { field, placeholder } => match submission.get(field) {
            Some(url) => {
                let url = escape_html(url);
                Value::markup(format!(r#"<a href="{url}">{url}</a>"#))
            }
            None => Value::text(placeholder),
        },
        Cell::Mailto { field } => {
            let address = escape_html(submission.get_or(field, ""));
            Value::markup(format!(r#"<a href="mailto:{address}">{address}</a>"#))
        }
        Cell::Count { field, placeholder } => match submission.get(field) {
            Some(raw) => Value::text(&format_count(raw)),
            None => Value::text(placeholder),
        },
        Cell::Services { field } => Value::text(&format_services(submission.get(field))),
        Cell::WithDetail {
            field,
            detail,
            placeholder,
        } => {
            let mut text = submission.get_or(field, placeholder).to_string();
            if let Some(detail) = submission.get(detail) {
                let _ = write!(text, " ({detail})");
            }
            Value::text(&text)
        }
        Cell::Amount {
            field,
            default,
            unit,
            unit_default,
        } => Value {
            html: format!(
                "{} {}",
                escape_html(submission.get_or(field, default)),
                escape_html(submission.get_or(unit, unit_default))
            ),
            label_style: "",
            value_style: " font-weight: bold; color: #3b82f6;",
        },
        Cell::Message { field } => Value {
            html: escape_html(submission.get(field)?).into_owned(),
            label_style: " vertical-align: top;",
            value_style: " white-space: pre-wrap;",
        },
    };

    Some(value)
}

fn attachment_info(attachment: &AttachmentRef) -> String {
    std::fs::metadata(&attachment.path).map_or_else(
        |_| attachment.filename.clone(),
        |meta| format_file_info(&attachment.filename, meta.len()),
    )
}

/// Writes a key/value table with alternating row shading.
struct Table<'a> {
    out: &'a mut String,
    rows: usize,
}

impl<'a> Table<'a> {
    fn open(out: &'a mut String) -> Self {
        let _ = write!(out, r#"<table style="{TABLE_STYLE}">"#);
        Self { out, rows: 0 }
    }

    fn row(&mut self, label: &str, value: &Value) {
        if self.rows % 2 == 0 {
            let _ = write!(self.out, r#"<tr style="{SHADED_ROW_STYLE}">"#);
        } else {
            self.out.push_str("<tr>");
        }
        let _ = write!(
            self.out,
            r#"<td style="{LABEL_STYLE}{}">{label}:</td><td style="{VALUE_STYLE}{}">{}</td></tr>"#,
            value.label_style, value.value_style, value.html
        );
        self.rows += 1;
    }

    fn close(self) {
        self.out.push_str("</table>");
    }
}
