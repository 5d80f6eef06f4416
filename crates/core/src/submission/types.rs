//! Submission data structures.

use std::collections::HashMap;

/// Multipart field names understood by the intake forms.
pub mod fields {
    /// Submitter company.
    pub const COMPANY: &str = "company";
    /// Company homepage URL.
    pub const HOMEPAGE: &str = "homepage";
    /// Submitter name.
    pub const NAME: &str = "name";
    /// Submitter email, used as `Reply-To`.
    pub const EMAIL: &str = "email";
    /// Free-text message.
    pub const MESSAGE: &str = "message";
    /// Monthly form volume (contact form).
    pub const FORM_COUNT: &str = "formCount";
    /// Industry.
    pub const INDUSTRY: &str = "industry";
    /// Project timeline (contact form).
    pub const TIMELINE: &str = "timeline";
    /// Current solution (contact form).
    pub const CURRENT_SOLUTION: &str = "currentSolution";
    /// Page count from the pricing calculator.
    pub const PAGES: &str = "pages";
    /// Selected services, e.g. `["analysis","scanning"]`.
    pub const SERVICES: &str = "services";
    /// Estimated total cost.
    pub const TOTAL_COST: &str = "totalCost";
    /// Currency of the estimate.
    pub const CURRENCY: &str = "currency";
    /// Page size.
    pub const PAGE_SIZE: &str = "pageSize";
    /// Free-text page size when "other" is chosen.
    pub const PAGE_SIZE_OTHER: &str = "pageSizeOther";
    /// Condition of the paper documents.
    pub const DOCUMENT_CONDITION: &str = "documentCondition";
    /// Urgency.
    pub const URGENCY: &str = "urgency";
    /// Deadline date accompanying the urgency.
    pub const URGENCY_DATE: &str = "urgencyDate";
    /// Phone number.
    pub const PHONE: &str = "phone";
}

/// Decoded text fields of one incoming form submission.
///
/// Values are stored verbatim. Lookups treat an empty value the same as a
/// missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    fields: HashMap<String, String>,
}

impl Submission {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Whether the field was submitted at all, even empty.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the value of a field if it is present and non-empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns the value of a field or `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Submitter email, empty when not provided.
    #[must_use]
    pub fn email(&self) -> &str {
        self.get_or(fields::EMAIL, "")
    }

    /// Best display name for the submitter: company, then name, then "Unknown".
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.get(fields::COMPANY)
            .or_else(|| self.get(fields::NAME))
            .unwrap_or("Unknown")
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}
