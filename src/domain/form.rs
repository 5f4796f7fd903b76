//! Contact form submission lifecycle.
//!
//! The controller in `contact.rs` owns the DOM; everything that can be
//! decided without a DOM lives here: the submission phase machine, the
//! outgoing payload encoding, and the mapping from the contact endpoint's
//! response to user-visible feedback.
//!
//! The endpoint contract: `200` means accepted (no body assumed), `400` and
//! `500` carry a JSON body `{ "message": string }`, anything else is
//! unexpected. A missing or unparsable body on `400`/`500` falls back to a
//! fixed per-status message rather than leaving the behavior undefined.

use serde::Deserialize;

/// Form-level fallback when a 400 arrives without a usable message.
pub const VALIDATION_FALLBACK: &str =
    "Your submission could not be validated. Please try again.";

/// Form-level fallback when a 500 arrives without a usable message.
pub const SERVER_FALLBACK: &str =
    "Something went wrong on our end. Please try again later.";

/// Form-level message for response codes outside the contract.
pub const UNEXPECTED_MESSAGE: &str =
    "Unexpected response from the server. Please try again.";

/// Form-level message when no response reached us at all. Deliberately
/// distinct from [`SERVER_FALLBACK`] so users read it as connectivity, not
/// as a problem with their input.
pub const NETWORK_MESSAGE: &str =
    "Network error. Check your connection and try again.";

/// Where a submission attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// No request in flight; the form is editable and submittable.
    #[default]
    Idle,
    /// A POST is in flight; submit controls are disabled.
    Submitting,
    /// The last attempt was accepted by the server.
    Succeeded,
    /// The last attempt failed; the form-level slot carries the feedback.
    Failed,
}

/// The error body the contact endpoint sends with 400 and 500 responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Classified result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx: the server accepted the message.
    Accepted,
    /// 400: validation or verification failed; message for the form slot.
    Rejected(String),
    /// 500: the server failed; message for the form slot.
    ServerFailure(String),
    /// Any status outside the contract.
    Unexpected(u16),
    /// Transport-level failure: no response reached us.
    TransportFailure,
}

impl SubmitOutcome {
    /// True when the contact modal should give way to the success modal.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The text to place in the form-level feedback slot, if any.
    pub fn feedback(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected(message) | Self::ServerFailure(message) => Some(message),
            Self::Unexpected(_) => Some(UNEXPECTED_MESSAGE),
            Self::TransportFailure => Some(NETWORK_MESSAGE),
        }
    }
}

/// Map a response from the contact endpoint to a [`SubmitOutcome`].
///
/// `body` is the raw response text when one could be read. Transport
/// failures never get here; the caller maps those to
/// [`SubmitOutcome::TransportFailure`] directly.
pub fn classify_response(status: u16, body: Option<&str>) -> SubmitOutcome {
    match status {
        200..=299 => SubmitOutcome::Accepted,
        400 => SubmitOutcome::Rejected(
            parse_message(body).unwrap_or_else(|| VALIDATION_FALLBACK.to_string()),
        ),
        500 => SubmitOutcome::ServerFailure(
            parse_message(body).unwrap_or_else(|| SERVER_FALLBACK.to_string()),
        ),
        other => SubmitOutcome::Unexpected(other),
    }
}

fn parse_message(body: Option<&str>) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body?).ok()?;
    Some(parsed.message)
}

/// The fields posted to the contact endpoint.
///
/// `token` is whatever the verification widget wrote into its hidden
/// `cf-turnstile-response` input; an empty token is posted as-is and left
/// for the server to reject.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub token: String,
}

impl ContactPayload {
    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_form_body(&self) -> String {
        let pairs = [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
            ("cf-turnstile-response", self.token.as_str()),
        ];
        let mut body = String::new();
        for (key, value) in pairs {
            if !body.is_empty() {
                body.push('&');
            }
            body.push_str(key);
            body.push('=');
            body.push_str(&urlencoding::encode(value));
        }
        body
    }
}

/// Submission lifecycle for the contact form.
///
/// One instance lives for the page's lifetime inside the controller; each
/// submission runs it `Idle -> Submitting -> Succeeded | Failed`, and
/// closing the modal resets it to `Idle`.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    phase: FormPhase,
    feedback: Option<String>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start a submission attempt.
    ///
    /// Refused while a request is already in flight; submissions are
    /// serialized by the disabled submit control, and this guard backs that
    /// up against delegated clicks that slip through. Prior feedback is
    /// cleared so every attempt starts from a clean slate.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Submitting;
        self.feedback = None;
        true
    }

    /// Record the outcome of the in-flight attempt.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.phase = if outcome.is_success() {
            FormPhase::Succeeded
        } else {
            FormPhase::Failed
        };
        self.feedback = outcome.feedback().map(str::to_string);
    }

    /// Back to a clean slate (modal closed or success dismissed).
    pub fn reset(&mut self) {
        self.phase = FormPhase::Idle;
        self.feedback = None;
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Feedback text from the last finished attempt, if it failed.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2xx_is_accepted() {
        assert_eq!(classify_response(200, None), SubmitOutcome::Accepted);
        assert_eq!(classify_response(204, Some("")), SubmitOutcome::Accepted);
    }

    #[test]
    fn test_400_surfaces_the_server_message_verbatim() {
        let outcome = classify_response(400, Some(r#"{"message":"Captcha failed"}"#));
        assert_eq!(outcome, SubmitOutcome::Rejected("Captcha failed".to_string()));
        assert_eq!(outcome.feedback(), Some("Captcha failed"));
    }

    #[test]
    fn test_400_without_parsable_body_falls_back() {
        assert_eq!(
            classify_response(400, Some("<html>Bad Request</html>")),
            SubmitOutcome::Rejected(VALIDATION_FALLBACK.to_string())
        );
        assert_eq!(
            classify_response(400, None),
            SubmitOutcome::Rejected(VALIDATION_FALLBACK.to_string())
        );
    }

    #[test]
    fn test_500_surfaces_message_with_generic_fallback() {
        assert_eq!(
            classify_response(500, Some(r#"{"message":"mailer down"}"#)),
            SubmitOutcome::ServerFailure("mailer down".to_string())
        );
        assert_eq!(
            classify_response(500, Some("Internal Server Error")),
            SubmitOutcome::ServerFailure(SERVER_FALLBACK.to_string())
        );
    }

    #[test]
    fn test_body_without_message_field_falls_back() {
        assert_eq!(
            classify_response(500, Some(r#"{"error":"nope"}"#)),
            SubmitOutcome::ServerFailure(SERVER_FALLBACK.to_string())
        );
    }

    #[test]
    fn test_other_statuses_are_unexpected() {
        assert_eq!(classify_response(403, None), SubmitOutcome::Unexpected(403));
        assert_eq!(classify_response(302, None), SubmitOutcome::Unexpected(302));
        assert_eq!(
            classify_response(403, None).feedback(),
            Some(UNEXPECTED_MESSAGE)
        );
    }

    #[test]
    fn test_network_feedback_is_distinct_from_server_feedback() {
        let network = SubmitOutcome::TransportFailure;
        let server = classify_response(500, None);
        assert_ne!(network.feedback(), server.feedback());
    }

    #[test]
    fn test_payload_form_encoding() {
        let payload = ContactPayload {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi there & hello".to_string(),
            token: "tok-123".to_string(),
        };
        assert_eq!(
            payload.to_form_body(),
            "name=Ada%20Lovelace&email=ada%40example.com&message=Hi%20there%20%26%20hello&cf-turnstile-response=tok-123"
        );
    }

    #[test]
    fn test_empty_fields_still_encode_every_key() {
        let body = ContactPayload::default().to_form_body();
        assert_eq!(body, "name=&email=&message=&cf-turnstile-response=");
    }

    #[test]
    fn test_session_serializes_submissions() {
        let mut session = FormSession::new();
        assert!(session.begin_submit());
        assert_eq!(session.phase(), FormPhase::Submitting);

        // A second click while in flight is refused.
        assert!(!session.begin_submit());

        session.finish(&SubmitOutcome::Accepted);
        assert_eq!(session.phase(), FormPhase::Succeeded);
        assert!(session.feedback().is_none());
    }

    #[test]
    fn test_failed_attempt_allows_resubmission() {
        let mut session = FormSession::new();
        assert!(session.begin_submit());
        session.finish(&SubmitOutcome::TransportFailure);
        assert_eq!(session.phase(), FormPhase::Failed);
        assert_eq!(session.feedback(), Some(NETWORK_MESSAGE));

        // No automatic retry: the user submits again explicitly.
        assert!(session.begin_submit());
        assert!(
            session.feedback().is_none(),
            "a new attempt must clear prior feedback"
        );
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut session = FormSession::new();
        assert!(session.begin_submit());
        session.finish(&SubmitOutcome::Unexpected(418));
        session.reset();
        assert_eq!(session.phase(), FormPhase::Idle);
        assert!(session.feedback().is_none());
    }
}
