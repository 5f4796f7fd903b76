//! The inline detail panel.
//!
//! A persistent region of the page (`#detailed-content`) that shows the
//! hovered element's detail content on wide viewports. Every update fades
//! the panel out, swaps the content at the transition midpoint, and fades
//! back in; swapping mid-transition avoids the flicker of an instant
//! replacement.

use gloo_timers::callback::Timeout;

use crate::dom;

/// Id of the inline panel element.
pub const PANEL_ID: &str = "detailed-content";

/// Half the panel's CSS opacity transition; content swaps at this midpoint.
pub const FADE_SWAP_MS: u32 = 150;

/// What the panel shows when nothing is hovered.
pub const PLACEHOLDER: &str = "Hover over highlighted items to see more details here.";

/// Compose the panel fragment for an element that declares an image.
///
/// The text comes first, then the image on its own line. The utility
/// classes are part of the page's styling contract for injected images.
pub fn image_fragment(text: &str, src: &str) -> String {
    format!(
        "{text}<br><img id=\"img-content\" src=\"{src}\" alt=\"Image\" \
         class=\"mt-2 w-full h-auto border-4 border-blue-800 p-2\"/>"
    )
}

/// Handle on the inline panel. Stateless: the panel element is re-resolved
/// on every operation so a missing panel is a logged no-op and timer
/// callbacks stay safe no matter what happened in between.
#[derive(Debug, Clone, Default)]
pub struct DetailPanel;

impl DetailPanel {
    pub fn new() -> Self {
        Self
    }

    /// Fade the given fragment into the panel.
    pub fn show(&self, html: &str) {
        fade_swap(html.to_string());
    }

    /// Fade the default placeholder back in.
    pub fn reset(&self) {
        fade_swap(PLACEHOLDER.to_string());
    }
}

/// Fade out, swap content at the midpoint, fade back in.
///
/// The timeout is fire-and-forget; the callback looks the panel up again
/// rather than holding a handle, so it tolerates the panel having been
/// removed (or the content having been superseded) while the timer ran.
fn fade_swap(html: String) {
    let Some(panel) = dom::by_id(PANEL_ID) else {
        tracing::debug!("detail panel #{PANEL_ID} not on this page");
        return;
    };
    let _ = panel.style().set_property("opacity", "0");
    Timeout::new(FADE_SWAP_MS, move || {
        if let Some(panel) = dom::by_id(PANEL_ID) {
            panel.set_inner_html(&html);
            let _ = panel.style().set_property("opacity", "1");
        }
    })
    .forget();
}
