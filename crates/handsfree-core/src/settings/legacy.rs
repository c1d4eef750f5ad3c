//! Codec for the legacy flat-string settings format.
//!
//! Older releases persisted preferences as two flat delimited strings:
//! entries separated by the literal token `"++"`, and the key/value pair
//! within an entry separated by `"::"`. The voice-command string stores the
//! nine trigger words keyed by action name; the custom-command string
//! stores `path::trigger` pairs.
//!
//! The format has no escaping, so a value containing either delimiter token
//! corrupts the stream. That fragility is documented here, not fixed; the
//! structured TOML config is the primary format and this codec exists only
//! to migrate old data. Round-trips are exact for strings free of both
//! tokens.
//!
//! Parsing is tolerant: empty entries, entries with no separator, and
//! unknown keys are skipped rather than rejected. An empty stored string
//! yields the default vocabulary.

use crate::command::table::{CommandBindings, CustomCommand};

/// Separator between entries.
const ENTRY_SEPARATOR: &str = "++";

/// Separator between the key and the value within one entry.
const PAIR_SEPARATOR: &str = "::";

// ── Action keys used in the voice-command string ──────────────────────────────

const KEY_LEFT_CLICK: &str = "mouseleftbutton";
const KEY_RIGHT_CLICK: &str = "mouserightbutton";
const KEY_DOUBLE_CLICK: &str = "mousedoubleclick";
const KEY_MINIMISE: &str = "minimise";
const KEY_MAXIMISE: &str = "maximise";
const KEY_CLOSE: &str = "close";
const KEY_SCROLL_UP: &str = "scrollup";
const KEY_SCROLL_DOWN: &str = "scrolldown";
const KEY_BACK: &str = "back";

/// Splits a stored string into `(key, value)` pairs, skipping empty and
/// malformed entries.
fn entries(stored: &str) -> impl Iterator<Item = (&str, &str)> {
    stored
        .split(ENTRY_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| entry.split_once(PAIR_SEPARATOR))
}

// ── Voice-command bindings ────────────────────────────────────────────────────

/// Parses the legacy voice-command string into [`CommandBindings`].
///
/// Keys that are absent (including the empty-string case, which older
/// releases wrote on first run) keep their default trigger word, so an
/// empty stored string loads the default nine-entry vocabulary verbatim.
pub fn parse_bindings(stored: &str) -> CommandBindings {
    let mut bindings = CommandBindings::default();
    for (key, value) in entries(stored) {
        let slot = match key {
            KEY_LEFT_CLICK => &mut bindings.left_click,
            KEY_RIGHT_CLICK => &mut bindings.right_click,
            KEY_DOUBLE_CLICK => &mut bindings.double_click,
            KEY_MINIMISE => &mut bindings.minimise,
            KEY_MAXIMISE => &mut bindings.maximise,
            KEY_CLOSE => &mut bindings.close,
            KEY_SCROLL_UP => &mut bindings.scroll_up,
            KEY_SCROLL_DOWN => &mut bindings.scroll_down,
            KEY_BACK => &mut bindings.back,
            _ => continue,
        };
        *slot = value.to_string();
    }
    bindings
}

/// Serializes [`CommandBindings`] to the legacy voice-command string, in the
/// entry order older releases wrote.
pub fn serialize_bindings(bindings: &CommandBindings) -> String {
    let pairs: [(&str, &str); 9] = [
        (KEY_LEFT_CLICK, &bindings.left_click),
        (KEY_RIGHT_CLICK, &bindings.right_click),
        (KEY_DOUBLE_CLICK, &bindings.double_click),
        (KEY_MINIMISE, &bindings.minimise),
        (KEY_MAXIMISE, &bindings.maximise),
        (KEY_CLOSE, &bindings.close),
        (KEY_SCROLL_UP, &bindings.scroll_up),
        (KEY_SCROLL_DOWN, &bindings.scroll_down),
        (KEY_BACK, &bindings.back),
    ];

    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(key);
        out.push_str(PAIR_SEPARATOR);
        out.push_str(value);
        out.push_str(ENTRY_SEPARATOR);
    }
    out
}

// ── Custom commands ───────────────────────────────────────────────────────────

/// Parses the legacy custom-command string into a list of [`CustomCommand`]s.
///
/// Each entry is `path::trigger`; malformed entries are skipped. Order is
/// preserved so first-match-wins dispatch behaves as it always has.
pub fn parse_custom_commands(stored: &str) -> Vec<CustomCommand> {
    entries(stored)
        .map(|(path, trigger)| CustomCommand {
            trigger: trigger.to_string(),
            path: path.to_string(),
        })
        .collect()
}

/// Serializes custom commands to the legacy custom-command string.
pub fn serialize_custom_commands(commands: &[CustomCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        out.push_str(&command.path);
        out.push_str(PAIR_SEPARATOR);
        out.push_str(&command.trigger);
        out.push_str(ENTRY_SEPARATOR);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_loads_default_bindings() {
        // Arrange / Act
        let bindings = parse_bindings("");

        // Assert – the default nine-entry vocabulary, verbatim
        assert_eq!(bindings, CommandBindings::default());
        assert_eq!(bindings.left_click, "select");
        assert_eq!(bindings.right_click, "options");
        assert_eq!(bindings.double_click, "open");
        assert_eq!(bindings.minimise, "minimise");
        assert_eq!(bindings.maximise, "maximise");
        assert_eq!(bindings.close, "close");
        assert_eq!(bindings.scroll_up, "up");
        assert_eq!(bindings.scroll_down, "down");
        assert_eq!(bindings.back, "back");
    }

    #[test]
    fn test_bindings_round_trip_is_exact() {
        // Arrange
        let mut bindings = CommandBindings::default();
        bindings.left_click = "fire".to_string();
        bindings.scroll_down = "descend".to_string();

        // Act
        let stored = serialize_bindings(&bindings);
        let restored = parse_bindings(&stored);

        // Assert
        assert_eq!(restored, bindings);
    }

    #[test]
    fn test_serialized_bindings_use_legacy_layout() {
        let stored = serialize_bindings(&CommandBindings::default());

        assert!(stored.starts_with("mouseleftbutton::select++"));
        assert!(stored.ends_with("back::back++"));
    }

    #[test]
    fn test_partial_bindings_string_keeps_defaults_for_missing_keys() {
        let bindings = parse_bindings("mouseleftbutton::tap++");

        assert_eq!(bindings.left_click, "tap");
        assert_eq!(bindings.right_click, "options");
    }

    #[test]
    fn test_malformed_and_unknown_entries_are_skipped() {
        let stored = "garbage++mouseleftbutton::tap++nosuchkey::x++justtext++";
        let bindings = parse_bindings(stored);

        assert_eq!(bindings.left_click, "tap");
        assert_eq!(bindings.back, "back");
    }

    #[test]
    fn test_custom_commands_round_trip_preserves_order() {
        // Arrange
        let commands = vec![
            CustomCommand {
                trigger: "notepad".to_string(),
                path: "C:\\Windows\\notepad.exe".to_string(),
            },
            CustomCommand {
                trigger: "browser".to_string(),
                path: "C:\\Program Files\\browser.exe".to_string(),
            },
        ];

        // Act
        let stored = serialize_custom_commands(&commands);
        let restored = parse_custom_commands(&stored);

        // Assert
        assert_eq!(restored, commands);
    }

    #[test]
    fn test_custom_commands_empty_string_parses_to_empty_list() {
        assert!(parse_custom_commands("").is_empty());
    }

    #[test]
    fn test_custom_command_entry_without_separator_is_skipped() {
        let restored = parse_custom_commands("justapath++a::b++");

        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].path, "a");
        assert_eq!(restored[0].trigger, "b");
    }
}
