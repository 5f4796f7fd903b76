//! Viewport mode classification.
//!
//! The dispatcher adapts its trigger (hover vs. tap) and its presentation
//! (inline panel vs. overlay popup) to the viewport. The mode is derived on
//! demand from two inputs the platform layer supplies: whether the narrow
//! media query matches, and whether the device advertises itself as mobile.
//! It is never cached, so rotation and window resizing are picked up by the
//! next event that asks.

/// How the user is expected to interact with detail content right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Wide viewport with a real hover: detail content goes to the inline
    /// panel, links navigate normally.
    Pointer,
    /// Narrow or touch-first viewport: taps stand in for hover and detail
    /// content opens the overlay popup.
    Touch,
}

impl ViewportMode {
    /// Classify from the narrow-viewport media query and the device hint.
    ///
    /// Either signal alone is enough to select [`ViewportMode::Touch`]: a
    /// phone in landscape can be wider than the breakpoint but still has no
    /// hover, and a desktop window dragged below the breakpoint behaves
    /// like a touch layout.
    pub fn classify(narrow: bool, mobile_hint: bool) -> Self {
        if narrow || mobile_hint {
            Self::Touch
        } else {
            Self::Pointer
        }
    }

    /// True when taps drive the detail content.
    pub fn is_tap(&self) -> bool {
        matches!(self, Self::Touch)
    }

    /// True when mouseleave must not reset the inline panel.
    ///
    /// Touch-first devices synthesize enter/leave around taps; honoring the
    /// leave would wipe the panel the instant it was filled.
    pub fn suppresses_leave(&self) -> bool {
        self.is_tap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_pointer_viewport_is_pointer_mode() {
        assert_eq!(ViewportMode::classify(false, false), ViewportMode::Pointer);
    }

    #[test]
    fn test_narrow_viewport_is_touch_mode() {
        assert_eq!(ViewportMode::classify(true, false), ViewportMode::Touch);
    }

    #[test]
    fn test_mobile_hint_forces_touch_even_when_wide() {
        // Phone in landscape: wider than the breakpoint, still no hover.
        assert_eq!(ViewportMode::classify(false, true), ViewportMode::Touch);
    }

    #[test]
    fn test_leave_suppression_tracks_tap_mode() {
        assert!(ViewportMode::Touch.suppresses_leave());
        assert!(!ViewportMode::Pointer.suppresses_leave());
    }
}
