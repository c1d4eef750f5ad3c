//! Platform-specific input injection implementations.
//!
//! The correct implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`. Only Windows has a native adapter; the
//! controller targets a single desktop OS and the mock stands in
//! everywhere else.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the Windows sink as `NativeInputSink` on Windows so the rest
/// of the codebase does not need to know the OS at compile time.
#[cfg(target_os = "windows")]
pub use windows::WindowsInputSink as NativeInputSink;
