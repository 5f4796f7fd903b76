//! The overlay popup for touch viewports.
//!
//! On narrow or touch-first viewports there is no inline panel in view, so
//! detail content opens as a full overlay (`#mobile-popup` wrapping
//! `#mobile-detailed-content`). Visibility is a `hidden`/`flex` class flip,
//! animated by the page's CSS; the 300ms close cool-down in
//! [`PopupState`] matches that transition so a bubbled tap cannot reopen
//! the overlay mid-close.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::dom;
use crate::domain::PopupState;
use crate::media;

/// Id of the overlay container.
pub const POPUP_ID: &str = "mobile-popup";

/// Id of the content region inside the overlay.
pub const POPUP_CONTENT_ID: &str = "mobile-detailed-content";

/// How long reopening stays suppressed after a close. Matches the CSS
/// transition on the overlay.
pub const CLOSE_COOLDOWN_MS: u32 = 300;

/// The page's single overlay popup.
///
/// The state machine is shared with the cool-down timer callback (and
/// across clones), hence the `Rc<RefCell<..>>`; everything runs on the
/// page's event loop, so the borrows never contend.
#[derive(Debug, Clone, Default)]
pub struct OverlayPopup {
    state: Rc<RefCell<PopupState>>,
}

impl OverlayPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer content to the overlay.
    ///
    /// Only shows in tap mode; on wide pointer viewports the inline panel
    /// is the presentation surface and this is a no-op. Also a no-op while
    /// the overlay is already visible or cooling down after a close.
    pub fn offer(&self, html: &str) {
        if !media::current_mode().is_tap() {
            return;
        }
        if !self.state.borrow_mut().open() {
            tracing::debug!("popup open suppressed (visible or cooling down)");
            return;
        }
        if let Some(content) = dom::by_id(POPUP_CONTENT_ID) {
            content.set_inner_html(html);
        }
        if !dom::reveal(POPUP_ID) {
            // Markup is missing; undo the state change so later offers
            // don't believe an overlay is showing.
            let _ = self.state.borrow_mut().close();
            self.state.borrow_mut().cooldown_elapsed();
        }
    }

    /// Hide the overlay and arm the reopen cool-down.
    pub fn close(&self) {
        if !self.state.borrow_mut().close() {
            return;
        }
        dom::conceal(POPUP_ID);
        let state = Rc::clone(&self.state);
        Timeout::new(CLOSE_COOLDOWN_MS, move || {
            state.borrow_mut().cooldown_elapsed();
        })
        .forget();
    }

    /// Whether the overlay is currently shown.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible()
    }
}
