//! The synthetic input event model.
//!
//! A [`SyntheticInputEvent`] describes one OS-level fabricated mouse or
//! keyboard event, indistinguishable to other applications from real
//! hardware input. Events are constructed by the application layer,
//! submitted to the OS through an injection adapter, and discarded; there
//! is no persistence, queuing, or batching beyond a single submit call.

// ── Mouse ─────────────────────────────────────────────────────────────────────

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

/// OS-independent identifier for the keys used by the fixed keyboard actions.
///
/// Only the keys reachable from the dispatch table are listed: the window
/// management combos hold Alt (and Space) while pressing F4 / N / X, and the
/// "back" action presses Backspace on its own. The injection adapter converts
/// these to platform key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    Alt,
    Space,
    F4,
    Backspace,
    KeyN,
    KeyX,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// A single synthetic input event.
///
/// Invariant: every `ButtonDown` logically pairs with a subsequent
/// `ButtonUp` for the same button, emitted back-to-back with no intervening
/// event (a click is down immediately followed by up). `KeyDown`/`KeyUp`
/// pairs in a combo follow the same rule, with holds released in reverse
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticInputEvent {
    /// Absolute cursor move. `x` and `y` are normalized screen coordinates
    /// in `[0, 65535]`, produced by [`crate::input::coords::normalize`].
    MoveAbsolute { x: u16, y: u16 },
    /// Mouse button press.
    ButtonDown(MouseButton),
    /// Mouse button release.
    ButtonUp(MouseButton),
    /// Vertical wheel rotation. Positive and negative deltas scroll in
    /// opposite directions; the dispatch layer sends ±`wheel_step` per
    /// recognized scroll command.
    Wheel { delta: i32 },
    /// Keyboard key press.
    KeyDown(VirtualKey),
    /// Keyboard key release.
    KeyUp(VirtualKey),
}

impl SyntheticInputEvent {
    /// Returns `true` for the mouse-device variants.
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            SyntheticInputEvent::MoveAbsolute { .. }
                | SyntheticInputEvent::ButtonDown(_)
                | SyntheticInputEvent::ButtonUp(_)
                | SyntheticInputEvent::Wheel { .. }
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_variants_report_is_mouse() {
        assert!(SyntheticInputEvent::MoveAbsolute { x: 0, y: 0 }.is_mouse());
        assert!(SyntheticInputEvent::ButtonDown(MouseButton::Left).is_mouse());
        assert!(SyntheticInputEvent::ButtonUp(MouseButton::Right).is_mouse());
        assert!(SyntheticInputEvent::Wheel { delta: 500 }.is_mouse());
    }

    #[test]
    fn test_keyboard_variants_are_not_mouse() {
        assert!(!SyntheticInputEvent::KeyDown(VirtualKey::Alt).is_mouse());
        assert!(!SyntheticInputEvent::KeyUp(VirtualKey::F4).is_mouse());
    }
}
