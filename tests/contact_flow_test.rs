//! Tests for the contact submission flow's pure core.
//!
//! The DOM-facing controller delegates every decision to the domain layer;
//! these tests walk full submission lifecycles through `FormSession` and
//! `classify_response` the way the controller does, without a browser:
//! 1. Outcomes map to the right feedback (and success carries none)
//! 2. The in-flight guard serializes attempts
//! 3. Every failure leaves the session resubmittable

use folio_web::domain::{
    classify_response, ContactPayload, FormPhase, FormSession, SubmitOutcome,
};
use folio_web::domain::form::{NETWORK_MESSAGE, SERVER_FALLBACK, UNEXPECTED_MESSAGE};

/// Drive one attempt the way the controller does: begin, classify, finish.
fn run_attempt(session: &mut FormSession, status: u16, body: Option<&str>) -> SubmitOutcome {
    assert!(session.begin_submit(), "attempt should be allowed to start");
    let outcome = classify_response(status, body);
    session.finish(&outcome);
    outcome
}

#[test]
fn test_successful_submission_reaches_succeeded_with_no_feedback() {
    let mut session = FormSession::new();
    let outcome = run_attempt(&mut session, 200, None);

    assert!(outcome.is_success());
    assert_eq!(session.phase(), FormPhase::Succeeded);
    assert!(session.feedback().is_none());
}

#[test]
fn test_captcha_rejection_surfaces_server_text_verbatim() {
    let mut session = FormSession::new();
    run_attempt(&mut session, 400, Some(r#"{"message":"Captcha failed"}"#));

    assert_eq!(session.phase(), FormPhase::Failed);
    assert_eq!(session.feedback(), Some("Captcha failed"));
}

#[test]
fn test_unparsable_500_body_gets_generic_server_message() {
    let mut session = FormSession::new();
    run_attempt(&mut session, 500, Some("<html>oops</html>"));

    assert_eq!(session.feedback(), Some(SERVER_FALLBACK));
}

#[test]
fn test_network_failure_is_distinguishable_from_server_failure() {
    let mut session = FormSession::new();
    assert!(session.begin_submit());
    session.finish(&SubmitOutcome::TransportFailure);

    assert_eq!(session.feedback(), Some(NETWORK_MESSAGE));
    assert_ne!(session.feedback(), Some(SERVER_FALLBACK));
}

#[test]
fn test_unexpected_status_gets_generic_message_and_allows_retry() {
    let mut session = FormSession::new();
    run_attempt(&mut session, 302, None);

    assert_eq!(session.feedback(), Some(UNEXPECTED_MESSAGE));
    // No automatic retry, but the user can submit again.
    assert!(session.begin_submit());
}

#[test]
fn test_in_flight_attempt_blocks_a_second_submission() {
    let mut session = FormSession::new();
    assert!(session.begin_submit());
    assert!(!session.begin_submit());
    assert!(!session.begin_submit());

    session.finish(&SubmitOutcome::Accepted);
    // Reset on modal close returns the session to a clean idle.
    session.reset();
    assert_eq!(session.phase(), FormPhase::Idle);
    assert!(session.begin_submit());
}

#[test]
fn test_consecutive_failed_attempts_each_start_clean() {
    let mut session = FormSession::new();

    run_attempt(&mut session, 400, Some(r#"{"message":"Captcha failed"}"#));
    assert_eq!(session.feedback(), Some("Captcha failed"));

    // The next attempt clears the previous feedback before it runs.
    assert!(session.begin_submit());
    assert!(session.feedback().is_none());
    session.finish(&classify_response(500, None));
    assert_eq!(session.feedback(), Some(SERVER_FALLBACK));
}

#[test]
fn test_payload_encodes_the_exact_wire_fields() {
    let payload = ContactPayload {
        name: "Jo".to_string(),
        email: "jo@site.io".to_string(),
        message: "hello".to_string(),
        token: "0.abc".to_string(),
    };
    let body = payload.to_form_body();
    for key in ["name=", "email=", "message=", "cf-turnstile-response="] {
        assert!(body.contains(key), "body missing {key}: {body}");
    }
    assert_eq!(body.matches('&').count(), 3, "exactly four pairs: {body}");
}
