//! Control-event sources.
//!
//! The tracker and speech runtimes are external collaborators: a vendor SDK
//! owns the device, runs the skeletal pipeline, compiles the recognition
//! grammar, and delivers results on threads the agent does not control.
//! This module defines the seam between that world and the agent's event
//! loop: a [`ControlSource`] bridges SDK callbacks into a tokio channel of
//! [`ControlEvent`]s.
//!
//! A [`ScriptedSource`] is always compiled. It replays a fixed event
//! sequence and then idles, standing in for the SDK adapter in tests and on
//! machines without a capture device.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// Channel capacity for control events. The loop drains far faster than a
/// 30 Hz sensor produces, so backpressure here is theoretical.
const CHANNEL_CAPACITY: usize = 64;

// ── Events ────────────────────────────────────────────────────────────────────

/// One event delivered by the tracker/speech runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Tracked-hand position, pre-scaled to primary-screen pixels by the
    /// sensor pipeline's joint-scaling helper.
    HandFrame { x: f32, y: f32 },
    /// Exact text of a recognized utterance.
    Utterance(String),
}

// ── Smoothing parameters ──────────────────────────────────────────────────────

/// Skeletal smoothing parameters handed to the sensor pipeline at startup.
///
/// The defaults are the field-tuned values the controller has always used;
/// they trade a little latency for a cursor that does not jitter with the
/// user's pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    #[serde(default = "default_correction")]
    pub correction: f32,
    #[serde(default = "default_prediction")]
    pub prediction: f32,
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    #[serde(default = "default_jitter_radius")]
    pub jitter_radius: f32,
    #[serde(default = "default_max_deviation_radius")]
    pub max_deviation_radius: f32,
}

fn default_correction() -> f32 {
    0.3
}
fn default_prediction() -> f32 {
    0.5
}
fn default_smoothing() -> f32 {
    0.05
}
fn default_jitter_radius() -> f32 {
    0.05
}
fn default_max_deviation_radius() -> f32 {
    0.04
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            correction: default_correction(),
            prediction: default_prediction(),
            smoothing: default_smoothing(),
            jitter_radius: default_jitter_radius(),
            max_deviation_radius: default_max_deviation_radius(),
        }
    }
}

// ── Source port ───────────────────────────────────────────────────────────────

/// Port for the device runtime that produces control events.
///
/// `start` consumes the source: the runtime owns its delivery threads from
/// that point on, and the agent only ever sees the channel.
pub trait ControlSource: Send {
    /// Whether a capture device is present. When `false`, hand tracking
    /// and voice control are disabled for the session; the agent still
    /// runs so it can exit cleanly on shutdown.
    fn available(&self) -> bool;

    /// Starts the runtime and returns the event stream.
    fn start(self: Box<Self>) -> mpsc::Receiver<ControlEvent>;
}

// ── Scripted source ───────────────────────────────────────────────────────────

/// A source that replays a fixed event sequence, then idles until dropped.
///
/// Idling (rather than closing the channel after the script) matches real
/// device behaviour: a sensor with nothing in front of it delivers no
/// events but keeps its stream open.
pub struct ScriptedSource {
    events: Vec<ControlEvent>,
    device_present: bool,
    smoothing: SmoothingParams,
}

impl ScriptedSource {
    /// Creates a source that will replay `events` in order.
    pub fn new(events: Vec<ControlEvent>) -> Self {
        Self {
            events,
            device_present: true,
            smoothing: SmoothingParams::default(),
        }
    }

    /// Creates a source that reports no capture device.
    pub fn without_device() -> Self {
        Self {
            events: Vec::new(),
            device_present: false,
            smoothing: SmoothingParams::default(),
        }
    }

    /// Sets the smoothing parameters the runtime would be configured with.
    pub fn with_smoothing(mut self, smoothing: SmoothingParams) -> Self {
        self.smoothing = smoothing;
        self
    }
}

impl ControlSource for ScriptedSource {
    fn available(&self) -> bool {
        self.device_present
    }

    fn start(self: Box<Self>) -> mpsc::Receiver<ControlEvent> {
        let this = *self;
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        debug!(
            scripted_events = this.events.len(),
            smoothing = ?this.smoothing,
            "control source starting"
        );
        tokio::spawn(async move {
            for event in this.events {
                if tx.send(event).await.is_err() {
                    return;
                }
            }
            // Keep the stream open after the script drains; the agent shuts
            // down via Ctrl-C, not source exhaustion.
            tx.closed().await;
        });
        rx
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
