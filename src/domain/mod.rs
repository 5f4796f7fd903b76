//! Domain objects for the interaction layer.
//!
//! These are the pure state machines behind the DOM-facing modules,
//! extracted so they can be unit tested on the host without a browser:
//!
//! - [`ViewportMode`] - hover-vs-tap classification of the viewport
//! - [`PopupState`] - overlay popup visibility and close cool-down
//! - [`FormSession`] - contact form submission lifecycle
//! - [`SubmitOutcome`] - classification of the contact endpoint's response

pub mod form;
pub mod popup;
pub mod viewport;

pub use form::{classify_response, ContactPayload, FormPhase, FormSession, SubmitOutcome};
pub use popup::PopupState;
pub use viewport::ViewportMode;
