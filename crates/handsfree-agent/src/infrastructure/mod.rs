//! Infrastructure layer for the agent.
//!
//! Contains OS-facing adapters: input injection, primary-screen metrics,
//! process launching, control-event sources, and config storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `handsfree_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`injection`** – OS-specific implementations of `InputSink`. The
//!   correct implementation is selected at compile time using
//!   `#[cfg(target_os)]`. A `MockInputSink` is also provided for tests.
//!
//! - **`screen`** – Primary-display resolution queries implementing the
//!   `ScreenMetrics` port.
//!
//! - **`launcher`** – Process spawning for custom voice commands.
//!
//! - **`source`** – Control-event sources: the port the tracker/speech
//!   runtime implements, plus a scripted source for tests and machines
//!   without a capture device.
//!
//! - **`storage`** – TOML config persistence and legacy settings migration.

pub mod injection;
pub mod launcher;
pub mod screen;
pub mod source;
pub mod storage;
