//! Text formatting helpers for rendered emails.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Formats an integer with `.` between groups of three digits.
///
/// `1234567` becomes `"1.234.567"`.
#[must_use]
pub fn format_grouped(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Groups `raw` when it parses as an integer, otherwise returns it unchanged.
#[must_use]
pub fn format_count(raw: &str) -> Cow<'_, str> {
    raw.parse::<i64>()
        .map_or(Cow::Borrowed(raw), |n| Cow::Owned(format_grouped(n)))
}

/// Display names for known service tokens.
const SERVICE_NAMES: &[(&str, &str)] = &[
    ("analysis", "Analysis"),
    ("verification", "Verification"),
    ("scanning", "Scanning"),
];

/// Turns a serialized service list like `["analysis","scanning"]` into
/// `"Analysis, Scanning"`.
///
/// Best-effort token extraction, not a JSON parse: brackets and double quotes
/// are dropped wherever they appear and the rest is split on commas. Values
/// containing commas or quotes are not representable.
#[must_use]
pub fn format_services(raw: Option<&str>) -> String {
    let stripped: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|&c| !matches!(c, '[' | ']' | '"'))
        .collect();

    if stripped.trim().is_empty() {
        return "None".to_string();
    }

    stripped
        .split(',')
        .map(str::trim)
        .map(|token| {
            SERVICE_NAMES
                .iter()
                .find(|(key, _)| *key == token)
                .map_or(token, |&(_, name)| name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"<name> (<size> KB)"` with two decimals.
#[must_use]
pub fn format_file_info(filename: &str, size: u64) -> String {
    let hundredths = (u128::from(size) * 100 + 512) / 1024;
    format!("{filename} ({}.{:02} KB)", hundredths / 100, hundredths % 100)
}
