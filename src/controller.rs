use serde_json::json;

use crate::analytics::Analytics;
use crate::domain::{FormData, SubmissionInput, SubmissionRequest};
use crate::sheets_client::SheetsClient;

pub const SUCCESS_MESSAGE: &str = "✓ Success! Check your email for the PDF guide.";
pub const SUBMIT_ERROR_MESSAGE: &str = "✗ Error submitting form. Please try again.";

/// Style of the feedback region. The two styles are mutually exclusive by
/// construction: setting one replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The page elements the controller depends on, captured once at
/// construction instead of being looked up on every call.
pub trait FormView {
    fn name_value(&self) -> String;
    fn email_value(&self) -> String;
    /// Resets both fields to empty strings.
    fn clear_fields(&mut self);
    /// Replaces the feedback region's text and style.
    fn set_feedback(&mut self, text: &str, kind: MessageKind);
    fn set_submit_enabled(&mut self, enabled: bool);
    /// Toggles the button between its static label and the loading
    /// indicator.
    fn set_loader_visible(&mut self, visible: bool);
}

/// Owns the validate/submit/feedback cycle of a single signup form.
///
/// Re-entrant per submit attempt: every attempt starts and ends with the
/// form idle, whatever the outcome.
pub struct SignupFormController<V: FormView> {
    view: V,
    client: SheetsClient,
    analytics: Analytics,
}

impl<V: FormView> SignupFormController<V> {
    pub fn new(view: V, client: SheetsClient, analytics: Analytics) -> Self {
        Self {
            view,
            client,
            analytics,
        }
    }

    /// Binds the controller once the page's structure is ready. Pages
    /// without the signup form get no controller.
    pub fn on_ready(form: Option<V>, client: SheetsClient, analytics: Analytics) -> Option<Self> {
        let view = form?;
        Some(Self::new(view, client, analytics))
    }

    /// Runs one full submit attempt. Validation failures are terminal: the
    /// loading state is never engaged and no request goes out. Otherwise the
    /// loading state is held for the whole round trip and cleared again on
    /// both the success and the failure path.
    #[tracing::instrument(name = "Handling signup form submit", skip_all)]
    pub async fn handle_submit(&mut self) {
        let raw = FormData {
            name: self.view.name_value(),
            email: self.view.email_value(),
        };
        let input = match SubmissionInput::try_from(raw) {
            Ok(input) => input,
            Err(error) => {
                self.show_message(&error.to_string(), MessageKind::Error);
                self.analytics
                    .track_event("form_validation_error", json!({ "field": error.field_tag() }));
                return;
            }
        };

        self.set_loading(true);
        self.analytics.track_event(
            "form_submit_start",
            json!({ "name": input.name.as_ref(), "email": input.email.as_ref() }),
        );

        let submission = SubmissionRequest::new(input);
        match self.client.submit(&submission).await {
            Ok(()) => {
                self.show_message(SUCCESS_MESSAGE, MessageKind::Success);
                self.analytics
                    .track_event("form_submit_success", json!({ "email": submission.email() }));
                self.view.clear_fields();
            }
            Err(error) => {
                tracing::error!(
                    error.cause_chain = ?error,
                    error.message = %error,
                    "Form submission failed",
                );
                self.show_message(SUBMIT_ERROR_MESSAGE, MessageKind::Error);
                self.analytics
                    .track_event("form_submit_error", json!({ "error": error.to_string() }));
            }
        }
        self.set_loading(false);
    }

    pub fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.view.set_feedback(text, kind);
    }

    /// While loading the submit control is disabled and the loading
    /// indicator replaces the button label.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.view.set_submit_enabled(!is_loading);
        self.view.set_loader_visible(is_loading);
    }
}
