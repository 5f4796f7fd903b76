//! The contact form controller.
//!
//! Orchestrates the modal lifecycle around one POST to the contact
//! endpoint: open the modal (loading the verification widget lazily),
//! serialize the fields, submit, and map the response onto the form-level
//! feedback slot or the success modal. Submissions are serialized by
//! disabling the form's buttons while a request is in flight; the
//! [`FormSession`] guard backs that up against clicks that slip through.
//!
//! Expected page structure: `#contact-modal` wrapping `#contact-form`,
//! a `#success-modal`, and the feedback slots listed in [`ERROR_SLOTS`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;
use crate::domain::{classify_response, ContactPayload, FormSession, SubmitOutcome};
use crate::error::DomError;
use crate::turnstile::WidgetLoader;

/// Id of the contact modal container.
pub const CONTACT_MODAL_ID: &str = "contact-modal";

/// Id of the form inside the contact modal.
pub const FORM_ID: &str = "contact-form";

/// Id of the modal shown after a successful submission.
pub const SUCCESS_MODAL_ID: &str = "success-modal";

/// Id of the form-level feedback slot.
pub const FORM_ERROR_SLOT: &str = "contact-form-error";

/// Every feedback slot, field-level and form-level. Cleared together
/// before each submission attempt and on every close.
pub const ERROR_SLOTS: [&str; 4] = [
    "contact-name-error",
    "contact-email-error",
    "contact-message-error",
    FORM_ERROR_SLOT,
];

/// Endpoint path used when the form carries no `action` of its own.
const CONTACT_PATH: &str = "/contact";

/// Drives the contact modal and its submission lifecycle.
///
/// Cheap to clone; clones share the session, the widget loader, and the
/// HTTP client, which is how the in-flight submit task holds on to the
/// controller.
#[derive(Clone)]
pub struct ContactController {
    session: Rc<RefCell<FormSession>>,
    widget: WidgetLoader,
    /// Reusable HTTP client (fetch-backed on wasm).
    http: reqwest::Client,
}

impl Default for ContactController {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactController {
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(FormSession::new())),
            widget: WidgetLoader::new(),
            http: reqwest::Client::new(),
        }
    }

    /// Reveal the contact modal, kicking off the widget load if needed.
    ///
    /// The load is single-flight and non-blocking: a failure is logged and
    /// the modal opens anyway - the submission will then fail server-side
    /// validation, which the error path already handles.
    pub fn open_modal(&self) {
        let widget = self.widget.clone();
        spawn_local(async move {
            if let Err(err) = widget.ensure_loaded().await {
                tracing::warn!("verification widget unavailable: {err}");
            }
        });
        dom::reveal(CONTACT_MODAL_ID);
    }

    /// Hide the contact modal and reset everything for the next visit.
    pub fn close_modal(&self) {
        dom::conceal(CONTACT_MODAL_ID);
        self.reset_form();
    }

    /// Dismiss the post-submission success modal.
    pub fn close_success_modal(&self) {
        dom::conceal(SUCCESS_MODAL_ID);
        self.reset_form();
    }

    /// Submit the form.
    ///
    /// Ignored while a request is already in flight. Clears all feedback
    /// slots, disables the buttons, POSTs the fields, and re-enables the
    /// buttons on every exit path. No automatic retries: each failure is
    /// terminal for its attempt.
    pub fn submit(&self) {
        if !self.session.borrow_mut().begin_submit() {
            tracing::debug!("submit ignored: request already in flight");
            return;
        }
        clear_feedback_slots();

        let Some(form) = contact_form() else {
            tracing::error!("{}", DomError::MissingElement(FORM_ID));
            self.session.borrow_mut().reset();
            return;
        };
        set_buttons_disabled(&form, true);

        let payload = collect_payload(&form);
        let url = submit_url(&form);
        let controller = self.clone();
        spawn_local(async move {
            let outcome = controller.post(&url, &payload).await;
            controller.finish(&outcome);
        });
    }

    async fn post(&self, url: &str, payload: &ContactPayload) -> SubmitOutcome {
        tracing::debug!("posting contact form to {url}");
        let request = self
            .http
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(payload.to_form_body());
        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.ok();
                classify_response(status, body.as_deref())
            }
            Err(err) => {
                tracing::warn!("contact request failed in transport: {err}");
                SubmitOutcome::TransportFailure
            }
        }
    }

    /// Apply a finished attempt to the page. Buttons come back first: the
    /// form must be resubmittable after any outcome.
    fn finish(&self, outcome: &SubmitOutcome) {
        if let Some(form) = contact_form() {
            set_buttons_disabled(&form, false);
        }
        self.session.borrow_mut().finish(outcome);

        if outcome.is_success() {
            tracing::info!("contact form accepted");
            dom::conceal(CONTACT_MODAL_ID);
            dom::reveal(SUCCESS_MODAL_ID);
            self.reset_form();
            return;
        }

        if let SubmitOutcome::Unexpected(status) = outcome {
            tracing::warn!("contact endpoint returned unexpected status {status}");
        }
        dom::set_text(FORM_ERROR_SLOT, outcome.feedback());
        // The token was consumed by this attempt; a fresh challenge is
        // required before the next one.
        self.widget.reset_challenge();
    }

    /// Clear field values, feedback slots, the widget challenge, and the
    /// session. Idempotent; runs on every close path.
    fn reset_form(&self) {
        if let Some(form) = contact_form() {
            form.reset();
        }
        clear_feedback_slots();
        self.widget.reset_challenge();
        self.session.borrow_mut().reset();
    }
}

fn contact_form() -> Option<HtmlFormElement> {
    dom::document()?
        .get_element_by_id(FORM_ID)?
        .dyn_into()
        .ok()
}

fn clear_feedback_slots() {
    for slot in ERROR_SLOTS {
        dom::set_text(slot, None);
    }
}

fn collect_payload(form: &HtmlFormElement) -> ContactPayload {
    ContactPayload {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        message: field_value(form, "message"),
        token: field_value(form, "cf-turnstile-response"),
    }
}

/// Read a named field's value; inputs and textareas are the only field
/// kinds the form uses (the token lives in a hidden input the widget owns).
fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let selector = format!("[name=\"{name}\"]");
    let Ok(Some(element)) = form.query_selector(&selector) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn set_buttons_disabled(form: &HtmlFormElement, disabled: bool) {
    let Ok(buttons) = form.query_selector_all("button") else {
        return;
    };
    for index in 0..buttons.length() {
        if let Some(button) = buttons
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(disabled);
        }
    }
}

/// The absolute submit URL: the form's resolved `action`, or the fixed
/// contact path against the page origin (the fetch layer rejects relative
/// URLs).
fn submit_url(form: &HtmlFormElement) -> String {
    let action = form.action();
    if !action.is_empty() {
        return action;
    }
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{CONTACT_PATH}")
}
