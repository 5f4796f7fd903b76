//! Error types for the interaction layer.
//!
//! Failures here are recoverable by design: a missing page element turns an
//! operation into a logged no-op, and a failed widget load only surfaces
//! later as a server-side validation error. Nothing in this crate panics on
//! a bad page.

use thiserror::Error;

/// Failures while resolving pieces of the page the layer depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// An element the operation needs is not in the document.
    #[error("element #{0} not found")]
    MissingElement(&'static str),

    /// The global `window`/`document` pair is unavailable. Only plausible
    /// outside a normal page context (workers, detached tests).
    #[error("no document available")]
    NoDocument,
}

/// Failures while loading the third-party verification script.
///
/// These are logged and otherwise ignored: the contact modal still opens,
/// and the missing token simply fails server-side validation later.
#[derive(Debug, Clone, Error)]
pub enum WidgetError {
    /// The document or `<head>` was unavailable for script injection.
    #[error("no insertion point for verification script: {0}")]
    NoInsertionPoint(&'static str),

    /// Creating or appending the script element failed.
    #[error("failed to inject verification script: {0}")]
    Injection(String),

    /// The browser reported a load error for the script resource.
    #[error("verification script failed to load: {0}")]
    Load(String),
}
