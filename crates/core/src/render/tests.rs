use std::io::Write as _;
use std::path::PathBuf;

use super::*;
use crate::submission::{CONTACT_FORM, OFFER_REQUEST_FORM, fields};

fn submission(pairs: &[(&str, &str)]) -> Submission {
    pairs.iter().copied().collect()
}

/// Value cell as rendered for a row without extra styles.
fn plain_cell(label: &str, value: &str) -> String {
    format!(
        r#"{label}:</td><td style="padding: 12px; border: 1px solid #dee2e6;">{value}</td>"#
    )
}

#[test]
fn test_contact_without_company_or_name() {
    let form = submission(&[
        (fields::EMAIL, "a@b.com"),
        (fields::MESSAGE, "hi"),
        (fields::COMPANY, ""),
    ]);

    let email = render(&CONTACT_FORM, &form, None);

    assert_eq!(email.subject, "New Contact: Unknown");
    assert_eq!(email.reply_to, "a@b.com");
    assert_eq!(email.sender_name, "Formalogix Contact Form");
    assert!(email.attachment.is_none());
    assert!(email.html.starts_with("<h2>New Contact Form Submission</h2>"));
    assert!(email.html.contains(&plain_cell("Homepage", "Not provided")));
    assert!(email.html.contains(&plain_cell("Company", "Not provided")));
    assert!(email.html.contains(&plain_cell("Monthly Forms", "Not provided")));
    assert!(email.html.contains(&plain_cell("Industry", "Not selected")));
    assert!(email.html.contains("white-space: pre-wrap;\">hi</td>"));
    assert!(!email.html.contains("Attachment:"));
}

#[test]
fn test_contact_subject_prefers_company_then_name() {
    let with_name = submission(&[(fields::NAME, "Jo")]);
    assert_eq!(render_subject(&CONTACT_FORM, &with_name), "New Contact: Jo");

    let with_both = submission(&[(fields::NAME, "Jo"), (fields::COMPANY, "Acme GmbH")]);
    assert_eq!(
        render_subject(&CONTACT_FORM, &with_both),
        "New Contact: Acme GmbH"
    );
}

#[test]
fn test_contact_formats_counts_and_links() {
    let form = submission(&[
        (fields::EMAIL, "a@b.com"),
        (fields::MESSAGE, "hi"),
        (fields::FORM_COUNT, "50000"),
        (fields::HOMEPAGE, "https://acme.example/?a=1&b=2"),
    ]);

    let html = render_body(&CONTACT_FORM, &form, None);

    assert!(html.contains(&plain_cell("Monthly Forms", "50.000")));
    assert!(html.contains(
        r#"<a href="https://acme.example/?a=1&amp;b=2">https://acme.example/?a=1&amp;b=2</a>"#
    ));
    assert!(html.contains(r#"<a href="mailto:a@b.com">a@b.com</a>"#));
}

#[test]
fn test_contact_non_numeric_count_passes_through() {
    let form = submission(&[(fields::FORM_COUNT, "about 1000")]);
    let html = render_body(&CONTACT_FORM, &form, None);
    assert!(html.contains(&plain_cell("Monthly Forms", "about 1000")));
}

#[test]
fn test_offer_request_summary() {
    let form = submission(&[
        (fields::EMAIL, "x@y.com"),
        (fields::NAME, "Jo"),
        (fields::PAGES, "1500"),
        (fields::SERVICES, r#"["analysis","scanning"]"#),
    ]);

    let email = render(&OFFER_REQUEST_FORM, &form, None);

    assert_eq!(email.subject, "New Offer Request: Jo (1.500 pages)");
    assert_eq!(email.sender_name, "Formalogix Offer Request");
    assert!(email.html.contains(&plain_cell("Number of Pages", "1.500")));
    assert!(email.html.contains(&plain_cell("Selected Services", "Analysis, Scanning")));
    assert!(email.html.contains("color: #3b82f6;\">0 EUR</td>"));
    assert!(email.html.contains("<h3 style=\"color: #3b82f6; margin-top: 24px;\">Calculator Summary</h3>"));
    assert!(email.html.contains("<strong>Action Required:</strong>"));
}

#[test]
fn test_offer_request_unparseable_pages() {
    let form = submission(&[(fields::NAME, "Jo"), (fields::PAGES, "lots")]);

    assert_eq!(
        render_subject(&OFFER_REQUEST_FORM, &form),
        "New Offer Request: Jo"
    );
    let html = render_body(&OFFER_REQUEST_FORM, &form, None);
    assert!(html.contains(&plain_cell("Number of Pages", "lots")));
}

#[test]
fn test_offer_request_placeholders() {
    let form = submission(&[(fields::EMAIL, "x@y.com"), (fields::NAME, "Jo")]);
    let html = render_body(&OFFER_REQUEST_FORM, &form, None);

    assert!(html.contains(&plain_cell("Number of Pages", "Not specified")));
    assert!(html.contains(&plain_cell("Selected Services", "None")));
    assert!(html.contains(&plain_cell("Page Size", "Not specified")));
    assert!(html.contains(&plain_cell("Urgency", "Not specified")));
    assert!(html.contains(&plain_cell("Phone", "Not provided")));
    assert!(!html.contains("Message:"));
}

#[test]
fn test_offer_request_details_and_message() {
    let form = submission(&[
        (fields::NAME, "Jo"),
        (fields::PAGE_SIZE, "other"),
        (fields::PAGE_SIZE_OTHER, "A3"),
        (fields::URGENCY, "deadline"),
        (fields::URGENCY_DATE, "2026-12-01"),
        (fields::TOTAL_COST, "1234.50"),
        (fields::CURRENCY, "CHF"),
        (fields::MESSAGE, "line one\nline two"),
    ]);
    let html = render_body(&OFFER_REQUEST_FORM, &form, None);

    assert!(html.contains(&plain_cell("Page Size", "other (A3)")));
    assert!(html.contains(&plain_cell("Urgency", "deadline (2026-12-01)")));
    assert!(html.contains(">1234.50 CHF</td>"));
    assert!(html.contains("white-space: pre-wrap;\">line one\nline two</td>"));
}

#[test]
fn test_user_input_is_escaped_everywhere() {
    let hostile = r#"<script>alert("x")</script> & 'q'"#;
    let form = submission(&[
        (fields::EMAIL, "a@b.com"),
        (fields::COMPANY, hostile),
        (fields::NAME, hostile),
        (fields::MESSAGE, hostile),
        (fields::INDUSTRY, hostile),
        (fields::FORM_COUNT, hostile),
        (fields::HOMEPAGE, hostile),
    ]);

    for descriptor in [&CONTACT_FORM, &OFFER_REQUEST_FORM] {
        let html = render_body(descriptor, &form, None);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert(\"x\")"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#x27;q&#x27;"));
    }
}

#[test]
fn test_first_row_is_shaded() {
    let html = render_body(&CONTACT_FORM, &Submission::new(), None);
    assert!(html.contains(
        r#"<table style="border-collapse: collapse; width: 100%; margin-bottom: 16px; font-family: Arial, sans-serif;"><tr style="background-color: #f8f9fa;"><td"#
    ));
    assert!(html.contains("</td></tr><tr><td"));
}

#[test]
fn test_attachment_row_shows_size() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 2048]).unwrap();

    let attachment = AttachmentRef {
        filename: "brief <final>.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        path: file.path().to_path_buf(),
    };

    let form = submission(&[(fields::EMAIL, "a@b.com"), (fields::MESSAGE, "hi")]);
    let email = render(&CONTACT_FORM, &form, Some(attachment.clone()));

    assert!(email.html.contains(&plain_cell("Attachment", "brief &lt;final&gt;.pdf (2.00 KB)")));
    assert_eq!(email.attachment, Some(attachment));
}

#[test]
fn test_attachment_row_falls_back_to_filename() {
    let attachment = AttachmentRef {
        filename: "scan.png".to_string(),
        content_type: "image/png".to_string(),
        path: PathBuf::from("/nonexistent/formalogix/scan.png"),
    };

    let form = submission(&[(fields::NAME, "Jo")]);
    let html = render_body(&OFFER_REQUEST_FORM, &form, Some(&attachment));

    assert!(html.contains(&plain_cell("Attachment", "scan.png")));
    let attachment_at = html.find("Attachment:").unwrap();
    let contact_at = html.find("Contact Information").unwrap();
    assert!(attachment_at > contact_at);
}

#[test]
fn test_rendering_is_deterministic() {
    let form = submission(&[
        (fields::EMAIL, "x@y.com"),
        (fields::NAME, "Jo"),
        (fields::PAGES, "1500"),
    ]);
    assert_eq!(
        render(&OFFER_REQUEST_FORM, &form, None),
        render(&OFFER_REQUEST_FORM, &form, None)
    );
}
