//! Windows primary-display metrics via GetSystemMetrics.

#![cfg(target_os = "windows")]

use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

use crate::application::inject_input::{InjectError, ScreenMetrics};

/// Windows implementation of [`ScreenMetrics`] for the primary display.
pub struct WindowsScreenMetrics;

impl WindowsScreenMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsScreenMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenMetrics for WindowsScreenMetrics {
    fn primary_resolution(&self) -> Result<(u32, u32), InjectError> {
        // SAFETY: GetSystemMetrics is always safe to call
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        // SAFETY: as above
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        if width <= 0 || height <= 0 {
            return Err(InjectError::Screen(format!(
                "GetSystemMetrics reported {width}x{height}"
            )));
        }
        Ok((width as u32, height as u32))
    }
}
