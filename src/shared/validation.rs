use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_URL: &str = "Enter a valid URL.";

/// Field-keyed validation failures, collected before an operation aborts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// The first message recorded for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ──────────────────────────────────────────────────────────
// Field checks
// ──────────────────────────────────────────────────────────

/// Trims a required text field; records an error when it is blank or too long.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    max_len: Option<usize>,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    } else if let Some(max) = max_len {
        check_length(errors, field, value, max);
    }
    value.to_string()
}

/// Trims an optional text field; blank input collapses to `None`.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max_len: Option<usize>,
) -> Option<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())?;

    if let Some(max) = max_len {
        check_length(errors, field, &value, max);
    }
    Some(value)
}

pub fn optional_url(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    let value = optional_text(errors, field, value, Some(200))?;
    if !url_pattern().is_match(&value) {
        errors.add(field, INVALID_URL);
    }
    Some(value)
}

pub fn optional_email(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    let value = optional_text(errors, field, value, Some(254))?;
    if !EmailAddress::is_valid(&value) {
        errors.add(field, INVALID_EMAIL);
    }
    Some(value)
}

pub fn required_email(errors: &mut ValidationErrors, field: &str, value: &str) -> String {
    let value = required_text(errors, field, value, Some(254));
    if !value.is_empty() && !EmailAddress::is_valid(&value) {
        errors.add(field, INVALID_EMAIL);
    }
    value
}

fn check_length(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.add(
            field,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, len
            ),
        );
    }
}

fn url_pattern() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| {
        Regex::new(r"(?i)^https?://(?:localhost|[^\s/?#]+\.[^\s/?#]+)(?::\d+)?(?:[/?#]\S*)?$")
            .expect("url pattern compiles")
    })
}
