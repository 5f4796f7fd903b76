//! Overlay popup state machine.
//!
//! The page has exactly one overlay popup. Its CSS close transition runs
//! for 300ms, during which a tap that bubbled out of the closing overlay
//! could immediately reopen it. [`PopupState`] encodes the guard: closing
//! arms a cool-down flag, and open requests are refused until the platform
//! layer reports the cool-down elapsed.
//!
//! The timer itself lives in the platform layer (a fire-and-forget browser
//! timeout); this object only tracks the resulting states, which is what
//! makes the t=0 / t=100ms / t=350ms reopening policy testable on the host.

/// Visibility and cool-down state of the overlay popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupState {
    visible: bool,
    closing: bool,
}

impl PopupState {
    /// A hidden popup with no cool-down pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request to show the popup.
    ///
    /// Returns true when the caller should actually reveal the overlay.
    /// Refused while the popup is already visible (opening twice is a
    /// no-op) or while the close cool-down is still running.
    pub fn open(&mut self) -> bool {
        if self.visible || self.closing {
            return false;
        }
        self.visible = true;
        true
    }

    /// Request to hide the popup.
    ///
    /// Returns true when the caller should hide the overlay and arm the
    /// cool-down timer. Closing a hidden popup is a no-op.
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.closing = true;
        true
    }

    /// The close transition finished; open requests are allowed again.
    ///
    /// Safe to call at any point, including after the popup was reopened by
    /// a path that never armed the timer.
    pub fn cooldown_elapsed(&mut self) {
        self.closing = false;
    }

    /// Whether the overlay is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_popup_is_hidden_and_openable() {
        let mut state = PopupState::new();
        assert!(!state.is_visible());
        assert!(state.open());
        assert!(state.is_visible());
    }

    #[test]
    fn test_open_while_visible_is_a_no_op() {
        let mut state = PopupState::new();
        assert!(state.open());
        assert!(!state.open(), "second open must be refused");
        assert!(state.is_visible());
    }

    #[test]
    fn test_close_arms_cooldown_that_suppresses_reopen() {
        let mut state = PopupState::new();
        assert!(state.open());

        // close at t=0
        assert!(state.close());
        assert!(!state.is_visible());

        // attempt reopen at t=100ms, before the 300ms cool-down elapsed
        assert!(!state.open(), "reopen during cool-down must be refused");

        // attempt at t=350ms, after the timer fired
        state.cooldown_elapsed();
        assert!(state.open());
        assert!(state.is_visible());
    }

    #[test]
    fn test_close_while_hidden_is_a_no_op() {
        let mut state = PopupState::new();
        assert!(!state.close());

        // No cool-down was armed, so opening still works.
        assert!(state.open());
    }

    #[test]
    fn test_stale_cooldown_callback_is_harmless() {
        let mut state = PopupState::new();
        assert!(state.open());
        assert!(state.close());
        state.cooldown_elapsed();
        assert!(state.open());

        // A second, stale timer callback fires while visible again.
        state.cooldown_elapsed();
        assert!(state.is_visible());
        assert!(!state.open(), "visibility no-op must survive stale timers");
    }
}
