//! Contact inquiries and the state of the contact form.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use validator::Validate;

/// Digits, spaces, dashes, parentheses and an optional leading `+`.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()-]{6,20}$").expect("phone pattern is valid"));

/// An inquiry submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(regex(path = "*PHONE_REGEX", message = "Phone number format is invalid"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

/// HTML forms send empty inputs as `""`; treat those as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

/// Phase of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitted,
}

/// Contact form state owned by one view.
///
/// After a successful submission the page shows a confirmation and reloads
/// `/contact`, a blank form, once `reset_after` has elapsed.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: FormStatus,
    reset_after: Duration,
}

impl ContactForm {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            fields: ContactSubmission::default(),
            status: FormStatus::Editing,
            reset_after,
        }
    }

    /// Restores previously typed values, e.g. after a validation failure.
    pub fn with_fields(mut self, fields: ContactSubmission) -> Self {
        self.fields = fields;
        self
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub fn mark_submitted(&mut self) {
        self.status = FormStatus::Submitted;
    }
}
