//! The utterance dispatch table.
//!
//! The speech engine hands the agent the exact text of each recognized
//! utterance. Dispatch is a flat total function from that text to a
//! [`ControlAction`], using exact string equality. Lookup order is part of
//! the observable behaviour users rely on:
//!
//! 1. the nine configurable [`CommandBindings`] trigger words,
//! 2. user-defined [`CustomCommand`] launch triggers (first match wins),
//! 3. the fixed `start`/`stop` tracking toggles.
//!
//! An utterance that matches nothing dispatches to `None` and is ignored by
//! the caller.

use serde::{Deserialize, Serialize};

/// Fixed trigger word that wires hand tracking to cursor movement.
pub const START_TRACKING_TRIGGER: &str = "start";

/// Fixed trigger word that unwires hand tracking from cursor movement.
pub const STOP_TRACKING_TRIGGER: &str = "stop";

// ── Actions ───────────────────────────────────────────────────────────────────

/// Action selected by the dispatch table for one recognized utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Left button down immediately followed by up.
    ClickLeft,
    /// Right button down immediately followed by up.
    ClickRight,
    /// Two back-to-back left clicks.
    DoubleClick,
    /// One wheel event with a negative delta.
    ScrollUp,
    /// One wheel event with a positive delta.
    ScrollDown,
    /// Alt+F4 key combo.
    CloseWindow,
    /// Backspace key press.
    Back,
    /// Alt+Space, N key combo (system menu minimise).
    MinimiseWindow,
    /// Alt+Space, X key combo (system menu maximise).
    MaximiseWindow,
    /// Launch the program at the stored path.
    Launch(String),
    /// Enable forwarding of hand frames to the cursor.
    StartTracking,
    /// Disable forwarding of hand frames to the cursor.
    StopTracking,
}

// ── Bindings ──────────────────────────────────────────────────────────────────

/// The nine user-configurable trigger words.
///
/// Each field holds the utterance that triggers the corresponding action.
/// Fields absent from a stored config fall back to the default vocabulary,
/// so configs written by older releases keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBindings {
    #[serde(default = "default_left_click")]
    pub left_click: String,
    #[serde(default = "default_right_click")]
    pub right_click: String,
    #[serde(default = "default_double_click")]
    pub double_click: String,
    #[serde(default = "default_minimise")]
    pub minimise: String,
    #[serde(default = "default_maximise")]
    pub maximise: String,
    #[serde(default = "default_close")]
    pub close: String,
    #[serde(default = "default_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_back")]
    pub back: String,
}

fn default_left_click() -> String {
    "select".to_string()
}
fn default_right_click() -> String {
    "options".to_string()
}
fn default_double_click() -> String {
    "open".to_string()
}
fn default_minimise() -> String {
    "minimise".to_string()
}
fn default_maximise() -> String {
    "maximise".to_string()
}
fn default_close() -> String {
    "close".to_string()
}
fn default_scroll_up() -> String {
    "up".to_string()
}
fn default_scroll_down() -> String {
    "down".to_string()
}
fn default_back() -> String {
    "back".to_string()
}

impl Default for CommandBindings {
    fn default() -> Self {
        Self {
            left_click: default_left_click(),
            right_click: default_right_click(),
            double_click: default_double_click(),
            minimise: default_minimise(),
            maximise: default_maximise(),
            close: default_close(),
            scroll_up: default_scroll_up(),
            scroll_down: default_scroll_down(),
            back: default_back(),
        }
    }
}

/// A user-defined utterance that launches a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCommand {
    /// Utterance that triggers the launch, compared by exact equality.
    pub trigger: String,
    /// Path of the program to spawn.
    pub path: String,
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Immutable dispatch table built from the bindings and custom commands.
#[derive(Debug, Clone)]
pub struct CommandTable {
    bindings: CommandBindings,
    custom: Vec<CustomCommand>,
}

impl CommandTable {
    /// Builds a table from configured bindings and custom commands.
    pub fn new(bindings: CommandBindings, custom: Vec<CustomCommand>) -> Self {
        Self { bindings, custom }
    }

    /// Resolves a recognized utterance to its action.
    ///
    /// Returns `None` when the utterance matches no binding, no custom
    /// command, and neither tracking toggle.
    pub fn dispatch(&self, utterance: &str) -> Option<ControlAction> {
        let b = &self.bindings;
        if utterance == b.left_click {
            return Some(ControlAction::ClickLeft);
        }
        if utterance == b.right_click {
            return Some(ControlAction::ClickRight);
        }
        if utterance == b.double_click {
            return Some(ControlAction::DoubleClick);
        }
        if utterance == b.scroll_up {
            return Some(ControlAction::ScrollUp);
        }
        if utterance == b.scroll_down {
            return Some(ControlAction::ScrollDown);
        }
        if utterance == b.close {
            return Some(ControlAction::CloseWindow);
        }
        if utterance == b.back {
            return Some(ControlAction::Back);
        }
        if utterance == b.minimise {
            return Some(ControlAction::MinimiseWindow);
        }
        if utterance == b.maximise {
            return Some(ControlAction::MaximiseWindow);
        }
        if let Some(custom) = self.custom.iter().find(|c| c.trigger == utterance) {
            return Some(ControlAction::Launch(custom.path.clone()));
        }
        if utterance == START_TRACKING_TRIGGER {
            return Some(ControlAction::StartTracking);
        }
        if utterance == STOP_TRACKING_TRIGGER {
            return Some(ControlAction::StopTracking);
        }
        None
    }

    /// Returns every trigger word the table responds to.
    ///
    /// This is the vocabulary a speech adapter compiles into its recognition
    /// grammar: the nine bindings, the custom triggers, and the fixed
    /// tracking toggles.
    pub fn vocabulary(&self) -> Vec<&str> {
        let b = &self.bindings;
        let mut words = vec![
            b.left_click.as_str(),
            b.right_click.as_str(),
            b.double_click.as_str(),
            b.minimise.as_str(),
            b.maximise.as_str(),
            b.close.as_str(),
            b.scroll_up.as_str(),
            b.scroll_down.as_str(),
            b.back.as_str(),
        ];
        words.extend(self.custom.iter().map(|c| c.trigger.as_str()));
        words.push(START_TRACKING_TRIGGER);
        words.push(STOP_TRACKING_TRIGGER);
        words
    }

    /// The bindings this table was built from.
    pub fn bindings(&self) -> &CommandBindings {
        &self.bindings
    }

    /// The custom commands this table was built from.
    pub fn custom_commands(&self) -> &[CustomCommand] {
        &self.custom
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new(CommandBindings::default(), Vec::new())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
