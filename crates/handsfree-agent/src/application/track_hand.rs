//! TrackHandUseCase: forwards tracked-hand frames to the cursor.
//!
//! The sensor pipeline delivers one frame per tracked hand position, with
//! coordinates already scaled to primary-screen pixels. While the shared
//! tracking flag is enabled, each frame becomes one absolute cursor move;
//! while disabled, frames are dropped. The flag is written by the command
//! dispatcher (the `start`/`stop` utterances) and read here, so it is an
//! atomic with release/acquire ordering rather than a plain field.
//!
//! Stationary hands produce identical consecutive frames at the sensor's
//! full frame rate; those are deduplicated at pixel granularity so the OS
//! queue is not flooded with no-op moves.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::inject_input::{InjectError, InjectInputUseCase};

/// The Track Hand use case.
pub struct TrackHandUseCase {
    injector: Arc<InjectInputUseCase>,
    tracking: Arc<AtomicBool>,
    last_pixel: Option<(i32, i32)>,
}

impl TrackHandUseCase {
    /// Creates a new use case sharing the dispatcher's tracking flag.
    pub fn new(injector: Arc<InjectInputUseCase>, tracking: Arc<AtomicBool>) -> Self {
        Self {
            injector,
            tracking,
            last_pixel: None,
        }
    }

    /// Handles one tracked-hand frame.
    ///
    /// Drops the frame when tracking is disabled or when it lands on the
    /// same pixel as the previous forwarded frame.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the OS event injection fails.
    pub fn handle_frame(&mut self, x: f32, y: f32) -> Result<(), InjectError> {
        if !self.tracking.load(Ordering::Acquire) {
            return Ok(());
        }
        let pixel = (x as i32, y as i32);
        if self.last_pixel == Some(pixel) {
            return Ok(());
        }
        self.last_pixel = Some(pixel);
        self.injector.move_to(x, y)
    }

    /// Clears the dedup state (e.g., when the tracked skeleton is lost).
    pub fn reset(&mut self) {
        self.last_pixel = None;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use handsfree_core::SyntheticInputEvent;

    use crate::application::inject_input::{InputSink, ScreenMetrics};

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<SyntheticInputEvent>>,
    }

    impl InputSink for RecordingSink {
        fn submit(&self, events: &[SyntheticInputEvent]) -> Result<u32, InjectError> {
            self.events.lock().unwrap().extend_from_slice(events);
            Ok(events.len() as u32)
        }
    }

    struct FixedScreen;

    impl ScreenMetrics for FixedScreen {
        fn primary_resolution(&self) -> Result<(u32, u32), InjectError> {
            Ok((1920, 1080))
        }
    }

    fn make_use_case(enabled: bool) -> (TrackHandUseCase, Arc<RecordingSink>, Arc<AtomicBool>) {
        let sink = Arc::new(RecordingSink::default());
        let injector = Arc::new(InjectInputUseCase::new(
            Arc::clone(&sink) as Arc<dyn InputSink>,
            Arc::new(FixedScreen),
        ));
        let flag = Arc::new(AtomicBool::new(enabled));
        let uc = TrackHandUseCase::new(injector, Arc::clone(&flag));
        (uc, sink, flag)
    }

    #[test]
    fn test_frames_are_dropped_while_tracking_disabled() {
        // Arrange
        let (mut uc, sink, _) = make_use_case(false);

        // Act
        uc.handle_frame(100.0, 200.0).unwrap();

        // Assert
        assert!(sink.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_frames_are_forwarded_while_tracking_enabled() {
        let (mut uc, sink, _) = make_use_case(true);

        uc.handle_frame(960.0, 540.0).unwrap();

        assert_eq!(
            *sink.events.lock().unwrap(),
            vec![SyntheticInputEvent::MoveAbsolute { x: 32767, y: 32767 }]
        );
    }

    #[test]
    fn test_identical_consecutive_frames_are_deduplicated() {
        let (mut uc, sink, _) = make_use_case(true);

        uc.handle_frame(100.0, 200.0).unwrap();
        uc.handle_frame(100.0, 200.0).unwrap();
        uc.handle_frame(100.0, 200.0).unwrap();

        assert_eq!(sink.events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_different_frames_are_not_deduplicated() {
        let (mut uc, sink, _) = make_use_case(true);

        uc.handle_frame(100.0, 200.0).unwrap();
        uc.handle_frame(101.0, 200.0).unwrap();

        assert_eq!(sink.events.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_flag_flip_mid_stream_gates_forwarding() {
        // Arrange
        let (mut uc, sink, flag) = make_use_case(true);
        uc.handle_frame(10.0, 10.0).unwrap();

        // Act – disable, frame dropped; enable, frames flow again
        flag.store(false, Ordering::Release);
        uc.handle_frame(20.0, 20.0).unwrap();
        flag.store(true, Ordering::Release);
        uc.handle_frame(30.0, 30.0).unwrap();

        // Assert
        assert_eq!(sink.events.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_reset_clears_dedup_state() {
        let (mut uc, sink, _) = make_use_case(true);
        uc.handle_frame(100.0, 200.0).unwrap();

        uc.reset();
        uc.handle_frame(100.0, 200.0).unwrap();

        assert_eq!(sink.events.lock().unwrap().len(), 2);
    }
}
