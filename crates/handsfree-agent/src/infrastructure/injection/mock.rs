//! Mock input sink for unit and integration testing.
//!
//! # Why a mock sink?
//!
//! The real sink (`WindowsInputSink`) calls `SendInput`, which:
//!
//! - Requires a desktop session to run.
//! - Actually moves the cursor and presses buttons on the test machine.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockInputSink` replaces the OS call with in-memory recording. Each
//! submitted event is pushed into a `Mutex<Vec<...>>` so assertions can
//! inspect exactly what was emitted and in what order.
//!
//! # Failure simulation
//!
//! Set `should_fail = true` to make every submit return a platform error,
//! or `drop_last = true` to report one fewer event queued than submitted.
//! The latter exercises the short-queue error path in the use case.

use std::sync::Mutex;

use handsfree_core::SyntheticInputEvent;

use crate::application::inject_input::{InjectError, InputSink};

/// A mock sink that records all submitted events without OS calls.
#[derive(Default)]
pub struct MockInputSink {
    /// Every event submitted, in submission order.
    pub events: Mutex<Vec<SyntheticInputEvent>>,
    /// When `true`, every submit returns an [`InjectError::Platform`].
    pub should_fail: bool,
    /// When `true`, submits report one fewer event queued than submitted.
    pub drop_last: bool,
}

impl MockInputSink {
    /// Creates a `MockInputSink` with empty records and no simulated failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    pub fn recorded(&self) -> Vec<SyntheticInputEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl InputSink for MockInputSink {
    /// Records the batch, or simulates a failure per the flags.
    fn submit(&self, events: &[SyntheticInputEvent]) -> Result<u32, InjectError> {
        if self.should_fail {
            return Err(InjectError::Platform("mock failure".into()));
        }
        self.events.lock().unwrap().extend_from_slice(events);
        let queued = events.len() as u32;
        if self.drop_last {
            Ok(queued.saturating_sub(1))
        } else {
            Ok(queued)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
