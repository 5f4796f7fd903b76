//! Viewport mode detection.
//!
//! The mode is computed on demand from the narrow-viewport media query plus
//! the `navigator.userAgentData.mobile` hint. The hint is read reflectively:
//! `userAgentData` is absent on several engines (and unstable in `web-sys`),
//! and an absent hint simply defers to the media query.

use gloo_events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::MediaQueryList;

use crate::domain::ViewportMode;

/// Breakpoint below which the page lays out for touch.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// The viewport mode right now. Derived, never cached.
pub fn current_mode() -> ViewportMode {
    ViewportMode::classify(is_narrow(), mobile_hint())
}

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(MOBILE_MEDIA_QUERY).ok()?
}

fn is_narrow() -> bool {
    if let Some(query) = media_query() {
        return query.matches();
    }
    // matchMedia unavailable: fall back to the raw viewport width.
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width < 768.0)
        .unwrap_or(false)
}

fn mobile_hint() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let Ok(ua_data) = Reflect::get(navigator.as_ref(), &JsValue::from_str("userAgentData")) else {
        return false;
    };
    if ua_data.is_undefined() || ua_data.is_null() {
        return false;
    }
    Reflect::get(&ua_data, &JsValue::from_str("mobile"))
        .ok()
        .and_then(|mobile| mobile.as_bool())
        .unwrap_or(false)
}

/// Subscribe to viewport mode changes (resize across the breakpoint,
/// rotation). The callback re-derives the mode itself; the event only
/// signals that it may have flipped.
///
/// Returns `None` when `matchMedia` is unavailable; dropping the listener
/// unsubscribes.
pub fn on_mode_change(mut callback: impl FnMut() + 'static) -> Option<EventListener> {
    let query = media_query()?;
    Some(EventListener::new(query.as_ref(), "change", move |_| {
        callback();
    }))
}
