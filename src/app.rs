//! Application composition and page-level event wiring.
//!
//! One [`App`] is built when the wasm module starts. It owns the dispatcher
//! and the contact controller (and through them every piece of state the
//! layer needs), plus the two page-level listeners: the delegated click
//! listener that turns `data-action` attributes into [`Action`] dispatches,
//! and the media-query watch that rebinds tap handlers when the viewport
//! mode flips.

use std::cell::RefCell;

use gloo_events::EventListener;

use crate::actions::Action;
use crate::contact::ContactController;
use crate::dom;
use crate::error::DomError;
use crate::hover::HoverDispatcher;
use crate::media;
use crate::popup::OverlayPopup;

thread_local! {
    /// Keeps the app (and its listeners) alive for the page's lifetime.
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Module entry: install diagnostics, build the app, park it.
pub fn boot() {
    install_panic_hook();
    let _ = tracing_wasm::try_set_as_global_default();

    match App::mount() {
        Some(app) => {
            APP.with(|slot| *slot.borrow_mut() = Some(app));
            tracing::info!("interaction layer mounted");
        }
        None => tracing::error!("{}; interaction layer not mounted", DomError::NoDocument),
    }
}

/// The interaction layer's composition root.
pub struct App {
    dispatcher: HoverDispatcher,
    contact: ContactController,
    /// Delegated click listener for action-tagged elements.
    _click: EventListener,
    /// Media-query watch that triggers tap rebinding.
    _mode_watch: Option<EventListener>,
}

impl App {
    /// Build the app and attach all page-level handlers.
    ///
    /// Returns `None` outside a page context (no document).
    pub fn mount() -> Option<Self> {
        let document = dom::document()?;

        let dispatcher = HoverDispatcher::new(OverlayPopup::new());
        let contact = ContactController::new();

        dispatcher.bind_hover();
        dispatcher.bind_taps();

        let rebind = dispatcher.clone();
        let mode_watch = media::on_mode_change(move || {
            tracing::debug!("viewport mode changed; rebinding tap handlers");
            rebind.bind_taps();
        });
        if mode_watch.is_none() {
            tracing::warn!("matchMedia unavailable; tap bindings will not follow viewport changes");
        }

        let click_dispatcher = dispatcher.clone();
        let click_contact = contact.clone();
        let click = EventListener::new(&document, "click", move |event| {
            let Some(attr) = dom::action_attr_for(event) else {
                return;
            };
            match Action::from_attr(&attr) {
                Some(action) => dispatch(&click_dispatcher, &click_contact, action),
                None => tracing::debug!("ignoring unknown data-action {attr:?}"),
            }
        });

        Some(Self {
            dispatcher,
            contact,
            _click: click,
            _mode_watch: mode_watch,
        })
    }

    /// The dispatcher half of the layer.
    pub fn dispatcher(&self) -> &HoverDispatcher {
        &self.dispatcher
    }

    /// The contact controller half of the layer.
    pub fn contact(&self) -> &ContactController {
        &self.contact
    }
}

/// Route a parsed page action to its handler.
fn dispatch(dispatcher: &HoverDispatcher, contact: &ContactController, action: Action) {
    tracing::debug!("dispatching {:?}", action);
    match action {
        // =====================================================================
        // Contact modal lifecycle
        // =====================================================================
        Action::OpenContactModal => contact.open_modal(),
        Action::CloseContactModal => contact.close_modal(),
        Action::SubmitContactForm => contact.submit(),
        Action::CloseSuccessModal => contact.close_success_modal(),

        // =====================================================================
        // Overlay popup
        // =====================================================================
        Action::CloseMobilePopup => dispatcher.close_popup(),
    }
}

/// Route panic messages to the console; installed once per page.
fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            web_sys::console::error_1(&format!("panic: {info}").into());
        }));
    });
}
