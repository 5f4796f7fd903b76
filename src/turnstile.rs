//! The third-party verification widget.
//!
//! The widget is an opaque external capability: we inject its script,
//! let it render into the form, and read its token implicitly through the
//! hidden input it maintains. The only API surface we touch is the global
//! `window.turnstile` object's `reset()` - looked up reflectively, so the
//! crate never depends on the widget's own types or protocol.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

use crate::dom;
use crate::error::WidgetError;

/// The widget's script resource.
pub const TURNSTILE_SRC: &str = "https://challenges.cloudflare.com/turnstile/v0/api.js";

/// Single-flight loader for the widget script.
///
/// The first call injects the script and caches the resulting promise; every
/// later call (and every concurrent one) awaits that same promise, so the
/// resource is fetched at most once per page lifetime. A failed load stays
/// cached too: the modal remains usable, verification just cannot succeed
/// server-side.
#[derive(Clone, Default)]
pub struct WidgetLoader {
    load: Rc<RefCell<Option<Promise>>>,
}

impl WidgetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the widget script is loaded, sharing any in-flight load.
    pub async fn ensure_loaded(&self) -> Result<(), WidgetError> {
        let promise = {
            let mut slot = self.load.borrow_mut();
            match slot.as_ref() {
                Some(promise) => promise.clone(),
                None => {
                    let promise = inject_script()?;
                    *slot = Some(promise.clone());
                    promise
                }
            }
        };
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| WidgetError::Load(format!("{err:?}")))
    }

    /// Reset the widget's challenge so the next attempt gets a fresh token.
    ///
    /// Called after every close and every failed submission; a stale or
    /// used token must never be resubmitted. Absence of the global (script
    /// not loaded yet, or load failed) is a quiet no-op.
    pub fn reset_challenge(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(widget) = Reflect::get(window.as_ref(), &JsValue::from_str("turnstile")) else {
            return;
        };
        if widget.is_undefined() || widget.is_null() {
            tracing::debug!("turnstile global absent; nothing to reset");
            return;
        }
        let Some(reset) = Reflect::get(&widget, &JsValue::from_str("reset"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
        else {
            tracing::warn!("turnstile global present but has no reset()");
            return;
        };
        if let Err(err) = reset.call0(&widget) {
            tracing::warn!("turnstile reset failed: {err:?}");
        }
    }
}

/// Create the script element and a promise settled by its load outcome.
fn inject_script() -> Result<Promise, WidgetError> {
    let document = dom::document().ok_or(WidgetError::NoInsertionPoint("document"))?;
    let head = document.head().ok_or(WidgetError::NoInsertionPoint("head"))?;
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|err| WidgetError::Injection(format!("{err:?}")))?
        .dyn_into()
        .map_err(|_| WidgetError::Injection("script element had unexpected type".to_string()))?;
    script.set_src(TURNSTILE_SRC);
    script.set_async(true);
    script.set_defer(true);

    let promise = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script)
        .map_err(|err| WidgetError::Injection(format!("{err:?}")))?;
    tracing::debug!("verification script injected");
    Ok(promise)
}
