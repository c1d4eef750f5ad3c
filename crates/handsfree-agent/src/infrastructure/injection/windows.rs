//! Windows input injection via the SendInput API.
//!
//! Each [`SyntheticInputEvent`] becomes one `INPUT` record; a batch is
//! submitted with a single `SendInput` call so paired events (click down/up,
//! combo holds) enter the OS queue back-to-back with nothing interleaved.
//! The returned count is surfaced to the caller, which treats a short count
//! as an error instead of ignoring it.

#![cfg(target_os = "windows")]

use handsfree_core::input::event::{MouseButton, SyntheticInputEvent, VirtualKey};
use windows::Win32::Foundation::GetLastError;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_KEYUP, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
    MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN,
    MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_WHEEL, MOUSEINPUT, MOUSE_EVENT_FLAGS, VIRTUAL_KEY, VK_BACK,
    VK_F4, VK_MENU, VK_N, VK_SPACE, VK_X,
};

use crate::application::inject_input::{InjectError, InputSink};

/// Windows implementation of [`InputSink`] using SendInput.
pub struct WindowsInputSink;

impl WindowsInputSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsInputSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSink for WindowsInputSink {
    fn submit(&self, events: &[SyntheticInputEvent]) -> Result<u32, InjectError> {
        if events.is_empty() {
            return Ok(0);
        }
        let inputs: Vec<INPUT> = events.iter().map(to_input).collect();

        // SAFETY: every INPUT in the slice is fully initialized above
        let queued = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };
        if queued == 0 {
            // SAFETY: GetLastError is always safe to call
            let code = unsafe { GetLastError() };
            return Err(InjectError::Platform(format!(
                "SendInput queued nothing (os error {})",
                code.0
            )));
        }
        Ok(queued)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_input(event: &SyntheticInputEvent) -> INPUT {
    match *event {
        SyntheticInputEvent::MoveAbsolute { x, y } => mouse_input(
            x as i32,
            y as i32,
            0,
            MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE,
        ),
        SyntheticInputEvent::ButtonDown(button) => mouse_input(0, 0, 0, button_flag(button, true)),
        SyntheticInputEvent::ButtonUp(button) => mouse_input(0, 0, 0, button_flag(button, false)),
        SyntheticInputEvent::Wheel { delta } => mouse_input(0, 0, delta as u32, MOUSEEVENTF_WHEEL),
        SyntheticInputEvent::KeyDown(key) => key_input(to_virtual_key(key), false),
        SyntheticInputEvent::KeyUp(key) => key_input(to_virtual_key(key), true),
    }
}

fn mouse_input(dx: i32, dy: i32, mouse_data: u32, flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: mouse_data,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn key_input(vk: VIRTUAL_KEY, key_up: bool) -> INPUT {
    let flags = if key_up {
        KEYEVENTF_KEYUP
    } else {
        KEYBD_EVENT_FLAGS(0)
    };
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn button_flag(button: MouseButton, pressed: bool) -> MOUSE_EVENT_FLAGS {
    match (button, pressed) {
        (MouseButton::Left, true) => MOUSEEVENTF_LEFTDOWN,
        (MouseButton::Left, false) => MOUSEEVENTF_LEFTUP,
        (MouseButton::Right, true) => MOUSEEVENTF_RIGHTDOWN,
        (MouseButton::Right, false) => MOUSEEVENTF_RIGHTUP,
        (MouseButton::Middle, true) => MOUSEEVENTF_MIDDLEDOWN,
        (MouseButton::Middle, false) => MOUSEEVENTF_MIDDLEUP,
    }
}

fn to_virtual_key(key: VirtualKey) -> VIRTUAL_KEY {
    match key {
        VirtualKey::Alt => VK_MENU,
        VirtualKey::Space => VK_SPACE,
        VirtualKey::F4 => VK_F4,
        VirtualKey::Backspace => VK_BACK,
        VirtualKey::KeyN => VK_N,
        VirtualKey::KeyX => VK_X,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // These test the pure INPUT construction; actually calling SendInput
    // requires an interactive desktop session.

    #[test]
    fn test_move_input_carries_absolute_flag() {
        let input = to_input(&SyntheticInputEvent::MoveAbsolute { x: 32767, y: 100 });

        assert_eq!(input.r#type, INPUT_MOUSE);
        // SAFETY: the mouse variant was just constructed
        let mi = unsafe { input.Anonymous.mi };
        assert_eq!(mi.dx, 32767);
        assert_eq!(mi.dy, 100);
        assert_eq!(mi.dwFlags, MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE);
    }

    #[test]
    fn test_wheel_input_round_trips_negative_delta() {
        let input = to_input(&SyntheticInputEvent::Wheel { delta: -500 });

        // SAFETY: the mouse variant was just constructed
        let mi = unsafe { input.Anonymous.mi };
        assert_eq!(mi.dwFlags, MOUSEEVENTF_WHEEL);
        assert_eq!(mi.mouseData as i32, -500);
    }

    #[test]
    fn test_button_flags_match_event_direction() {
        assert_eq!(button_flag(MouseButton::Left, true), MOUSEEVENTF_LEFTDOWN);
        assert_eq!(button_flag(MouseButton::Left, false), MOUSEEVENTF_LEFTUP);
        assert_eq!(button_flag(MouseButton::Right, true), MOUSEEVENTF_RIGHTDOWN);
        assert_eq!(button_flag(MouseButton::Right, false), MOUSEEVENTF_RIGHTUP);
    }

    #[test]
    fn test_key_up_input_carries_keyup_flag() {
        let input = to_input(&SyntheticInputEvent::KeyUp(VirtualKey::F4));

        assert_eq!(input.r#type, INPUT_KEYBOARD);
        // SAFETY: the keyboard variant was just constructed
        let ki = unsafe { input.Anonymous.ki };
        assert_eq!(ki.wVk, VK_F4);
        assert_eq!(ki.dwFlags, KEYEVENTF_KEYUP);
    }
}
