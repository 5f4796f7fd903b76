//! Folio Web - the browser interaction layer for the Folio portfolio site
//!
//! Compiled to `wasm32-unknown-unknown` and loaded by the page, this crate
//! drives the contextual detail panels (hover on desktop, tap on narrow
//! viewports) and the contact modal's submission lifecycle. Pure domain
//! logic lives in target-independent modules so the host toolchain can run
//! their tests; everything that touches the DOM is gated to wasm32.

pub mod actions;
pub mod domain;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod contact;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod hover;
#[cfg(target_arch = "wasm32")]
pub mod media;
#[cfg(target_arch = "wasm32")]
pub mod panel;
#[cfg(target_arch = "wasm32")]
pub mod popup;
#[cfg(target_arch = "wasm32")]
pub mod turnstile;

/// Module entry point, invoked by the wasm loader once the page has the
/// module instantiated. Everything else hangs off the [`app::App`] built
/// here.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::boot();
}
