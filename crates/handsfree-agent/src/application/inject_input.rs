//! InjectInputUseCase: translates controller intents into synthetic OS input.
//!
//! This use case sits at the application layer and delegates to an
//! [`InputSink`] trait object for OS-level event injection. The
//! platform-specific implementations are in the infrastructure layer.
//!
//! Each intent submits its events as a single batch, which is what keeps the
//! pairing invariant (a click's button-down is immediately followed by its
//! button-up, with no intervening event). Submission is checked: the OS
//! reports how many events it queued, and a short count surfaces as a typed
//! error instead of being ignored.

use std::sync::Arc;

use handsfree_core::input::coords::normalize;
use handsfree_core::input::event::{MouseButton, SyntheticInputEvent, VirtualKey};
use thiserror::Error;

/// Error type for input injection operations.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The OS rejected the batch outright.
    #[error("platform injection error: {0}")]
    Platform(String),
    /// The OS accepted fewer events than were submitted.
    #[error("OS queued {queued} of {submitted} synthetic events")]
    ShortQueue { submitted: u32, queued: u32 },
    /// The primary display's dimensions could not be determined.
    #[error("could not determine primary screen size: {0}")]
    Screen(String),
}

/// Capability boundary for OS input injection.
///
/// Each supported OS provides an implementation in the infrastructure
/// layer; tests use a recording mock. Submitting is a global, process
/// external side effect: the queued events are visible to whatever
/// application holds input focus, with no undo.
pub trait InputSink: Send + Sync {
    /// Submits a batch of events to the OS input queue.
    ///
    /// Returns the number of events the OS accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError::Platform`] when the OS rejects the batch.
    fn submit(&self, events: &[SyntheticInputEvent]) -> Result<u32, InjectError>;
}

/// Port for querying the primary display's pixel dimensions.
///
/// Only the primary display is ever queried; multi-monitor setups are out
/// of scope.
pub trait ScreenMetrics: Send + Sync {
    /// Returns `(width, height)` of the primary display in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError::Screen`] when the OS query fails.
    fn primary_resolution(&self) -> Result<(u32, u32), InjectError>;
}

/// The Inject Input use case.
///
/// Builds event batches for each controller intent and submits them through
/// the injected [`InputSink`].
pub struct InjectInputUseCase {
    sink: Arc<dyn InputSink>,
    screen: Arc<dyn ScreenMetrics>,
}

impl InjectInputUseCase {
    /// Creates a new use case with the given sink and screen metrics port.
    pub fn new(sink: Arc<dyn InputSink>, screen: Arc<dyn ScreenMetrics>) -> Self {
        Self { sink, screen }
    }

    /// Submits a batch and verifies the OS accepted all of it.
    fn submit_all(&self, events: &[SyntheticInputEvent]) -> Result<(), InjectError> {
        let submitted = events.len() as u32;
        let queued = self.sink.submit(events)?;
        if queued != submitted {
            return Err(InjectError::ShortQueue { submitted, queued });
        }
        Ok(())
    }

    /// Emits a left click: button down immediately followed by button up.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the OS event injection fails.
    pub fn click_left(&self) -> Result<(), InjectError> {
        self.submit_all(&[
            SyntheticInputEvent::ButtonDown(MouseButton::Left),
            SyntheticInputEvent::ButtonUp(MouseButton::Left),
        ])
    }

    /// Emits a right click: button down immediately followed by button up.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the OS event injection fails.
    pub fn click_right(&self) -> Result<(), InjectError> {
        self.submit_all(&[
            SyntheticInputEvent::ButtonDown(MouseButton::Right),
            SyntheticInputEvent::ButtonUp(MouseButton::Right),
        ])
    }

    /// Emits two back-to-back left clicks.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the OS event injection fails.
    pub fn double_click_left(&self) -> Result<(), InjectError> {
        self.submit_all(&[
            SyntheticInputEvent::ButtonDown(MouseButton::Left),
            SyntheticInputEvent::ButtonUp(MouseButton::Left),
            SyntheticInputEvent::ButtonDown(MouseButton::Left),
            SyntheticInputEvent::ButtonUp(MouseButton::Left),
        ])
    }

    /// Moves the cursor to an absolute pixel position on the primary display.
    ///
    /// Queries the primary display's dimensions, normalizes the position to
    /// `[0, 65535]`, and emits a single absolute move event.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the screen query or event injection fails.
    pub fn move_to(&self, x: f32, y: f32) -> Result<(), InjectError> {
        let (width, height) = self.screen.primary_resolution()?;
        let (nx, ny) = normalize(x, y, width as f32, height as f32);
        self.submit_all(&[SyntheticInputEvent::MoveAbsolute { x: nx, y: ny }])
    }

    /// Emits a single wheel event carrying the signed delta.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the OS event injection fails.
    pub fn wheel(&self, delta: i32) -> Result<(), InjectError> {
        self.submit_all(&[SyntheticInputEvent::Wheel { delta }])
    }

    /// Emits a bare key press: key down immediately followed by key up.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the OS event injection fails.
    pub fn key_press(&self, key: VirtualKey) -> Result<(), InjectError> {
        self.submit_all(&[
            SyntheticInputEvent::KeyDown(key),
            SyntheticInputEvent::KeyUp(key),
        ])
    }

    /// Emits a modified keystroke: holds pressed in order, the key pressed
    /// and released, then the holds released in reverse order.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the OS event injection fails.
    pub fn key_combo(&self, holds: &[VirtualKey], key: VirtualKey) -> Result<(), InjectError> {
        let mut events = Vec::with_capacity(holds.len() * 2 + 2);
        for &hold in holds {
            events.push(SyntheticInputEvent::KeyDown(hold));
        }
        events.push(SyntheticInputEvent::KeyDown(key));
        events.push(SyntheticInputEvent::KeyUp(key));
        for &hold in holds.iter().rev() {
            events.push(SyntheticInputEvent::KeyUp(hold));
        }
        self.submit_all(&events)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
