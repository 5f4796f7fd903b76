//! The hover/tap interaction dispatcher.
//!
//! Marked elements declare their detail content declaratively:
//!
//! - `data-hover` - HTML fragment to present (absent = not interactive)
//! - `data-hover-img` - optional image URL appended to the fragment
//! - `data-is-link="true"` - element is a real link: preview inline on
//!   hover, never hijack the click for the overlay
//!
//! On wide pointer viewports the content goes to the inline panel on
//! mouseenter and the placeholder returns on mouseleave. On touch
//! viewports taps stand in for hover: the first tap on an element prevents
//! navigation and opens the overlay popup; tapping the same element again
//! falls through untouched. Tap bindings are rebuilt whenever the viewport
//! mode flips, and rebinding starts by dropping the old listeners, so a
//! resize storm never stacks duplicate handlers on an element.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::Element;

use crate::dom;
use crate::media;
use crate::panel::{self, DetailPanel};
use crate::popup::OverlayPopup;

/// Binds detail-content elements to the panel and popup surfaces.
///
/// One instance is built at page init and owns every piece of dispatcher
/// state that used to be free-floating: the bound listeners and the
/// last-activated element reference. Clones share that state, which is how
/// event closures hold on to the dispatcher.
#[derive(Clone)]
pub struct HoverDispatcher {
    panel: DetailPanel,
    popup: OverlayPopup,
    hover_listeners: Rc<RefCell<Vec<EventListener>>>,
    tap_listeners: Rc<RefCell<Vec<EventListener>>>,
    /// Last element activated by tap; suppresses redundant reopening when
    /// the same element is tapped twice.
    active: Rc<RefCell<Option<Element>>>,
}

impl HoverDispatcher {
    pub fn new(popup: OverlayPopup) -> Self {
        Self {
            panel: DetailPanel::new(),
            popup,
            hover_listeners: Rc::new(RefCell::new(Vec::new())),
            tap_listeners: Rc::new(RefCell::new(Vec::new())),
            active: Rc::new(RefCell::new(None)),
        }
    }

    /// Attach mouseenter/mouseleave pairs to every interactive element.
    ///
    /// Bound once at init; replaces any previous bindings if called again.
    pub fn bind_hover(&self) {
        let mut listeners = self.hover_listeners.borrow_mut();
        listeners.clear();

        let elements = dom::interactive_elements();
        tracing::debug!("binding hover handlers to {} elements", elements.len());
        for element in elements {
            let dispatcher = self.clone();
            let target = element.clone();
            listeners.push(EventListener::new(&element, "mouseenter", move |_| {
                dispatcher.present(&target);
            }));

            let dispatcher = self.clone();
            listeners.push(EventListener::new(&element, "mouseleave", move |_| {
                // No true hover on touch-first devices; the synthetic leave
                // would wipe the panel right after a tap filled it.
                if !media::current_mode().suppresses_leave() {
                    dispatcher.panel.reset();
                }
            }));
        }
    }

    /// (Re)build tap bindings for the current viewport mode.
    ///
    /// Called at init and again on every mode change. Dropping the previous
    /// listeners first keeps rebinding idempotent. In pointer mode no tap
    /// listeners exist at all; link elements are excluded in tap mode so
    /// navigation still works.
    pub fn bind_taps(&self) {
        let mut listeners = self.tap_listeners.borrow_mut();
        listeners.clear();
        self.active.borrow_mut().take();

        let mode = media::current_mode();
        if !mode.is_tap() {
            tracing::debug!("pointer mode: no tap bindings");
            return;
        }

        let options = EventListenerOptions::enable_prevent_default();
        let mut bound = 0usize;
        for element in dom::interactive_elements() {
            if dom::is_link(&element) {
                continue;
            }
            let dispatcher = self.clone();
            let target = element.clone();
            listeners.push(EventListener::new_with_options(
                &element,
                "click",
                options,
                move |event| {
                    let is_active = dispatcher.active.borrow().as_ref() == Some(&target);
                    if is_active {
                        return;
                    }
                    event.prevent_default();
                    dispatcher.present(&target);
                    *dispatcher.active.borrow_mut() = Some(target.clone());
                },
            ));
            bound += 1;
        }
        tracing::debug!("touch mode: bound tap handlers to {bound} elements");
    }

    /// Present an element's detail content on the active surfaces.
    ///
    /// The inline panel always updates; the overlay is offered only for
    /// non-link elements (and only shows in tap mode).
    pub fn present(&self, element: &Element) {
        let Some(text) = element.get_attribute("data-hover") else {
            return;
        };
        let html = match element.get_attribute("data-hover-img") {
            Some(src) => panel::image_fragment(&text, &src),
            None => text,
        };
        self.panel.show(&html);
        if !dom::is_link(element) {
            self.popup.offer(&html);
        }
    }

    /// Close the overlay popup (delegated `close-mobile-popup` action).
    pub fn close_popup(&self) {
        self.popup.close();
    }
}
