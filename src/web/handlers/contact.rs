//! Contact page and HTML form submission.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::contact::{ContactForm, ContactSubmission};
use crate::domain::entities::ContactChannel;
use crate::state::AppState;
use crate::web::view::Layout;

/// Template for the contact page.
///
/// Once submitted, the page shows a confirmation and refreshes back to a blank
/// form after `reset_secs`.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub layout: Layout,
    pub channels: &'a [ContactChannel],
    pub form: ContactForm,
    pub errors: BTreeMap<String, String>,
    /// Set when delivery failed after validation passed.
    pub failure: Option<String>,
    pub reset_secs: u64,
}

impl ContactTemplate<'_> {
    /// Message for a field, empty when the field is valid.
    pub fn error(&self, field: &str) -> &str {
        self.errors.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn phone(&self) -> &str {
        self.form.fields().phone.as_deref().unwrap_or_default()
    }
}

fn page(state: &AppState, form: ContactForm) -> ContactTemplate<'_> {
    ContactTemplate {
        layout: Layout::new(state, "Contact Us", "contact"),
        channels: &state.content_service.content().contact_channels,
        reset_secs: form.reset_after().as_secs(),
        form,
        errors: BTreeMap::new(),
        failure: None,
    }
}

/// Renders a blank contact form.
///
/// # Endpoint
///
/// `GET /contact`
pub async fn contact_page_handler(State(state): State<AppState>) -> Response {
    page(&state, ContactForm::new(state.site.contact_reset)).into_response()
}

/// Handles a submitted contact form.
///
/// # Endpoint
///
/// `POST /contact` (`application/x-www-form-urlencoded`)
///
/// # Responses
///
/// - 200 with the confirmation when the inquiry was accepted
/// - 400 with the typed values and field messages when validation fails
/// - 500 with the typed values when delivery fails
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> Response {
    let form = ContactForm::new(state.site.contact_reset).with_fields(submission.clone());

    match state.contact_service.submit(submission).await {
        Ok(receipt) => {
            let mut form = form;
            form.mark_submitted();
            tracing::debug!(reference = %receipt.reference, "Contact form submitted");
            page(&state, form).into_response()
        }
        Err(err) => {
            let status = err.status();
            let mut view = page(&state, form);
            if status == StatusCode::BAD_REQUEST {
                view.errors = field_errors(err.details());
            } else {
                view.failure = Some(err.message().to_string());
            }
            (status, view).into_response()
        }
    }
}

fn field_errors(details: &serde_json::Value) -> BTreeMap<String, String> {
    details
        .get("fields")
        .and_then(|fields| serde_json::from_value(fields.clone()).ok())
        .unwrap_or_default()
}
