//! Integration tests for the legacy settings codec.
//!
//! These tests verify complete round-trips through the public API, and that
//! bindings restored from legacy strings drive the dispatch table exactly as
//! the originals did.

use handsfree_core::settings::legacy;
use handsfree_core::{CommandBindings, CommandTable, ControlAction, CustomCommand};

/// Serializes bindings, parses the result, and asserts exact equality.
fn roundtrip_bindings(bindings: CommandBindings) -> CommandBindings {
    let stored = legacy::serialize_bindings(&bindings);
    let restored = legacy::parse_bindings(&stored);
    assert_eq!(restored, bindings, "bindings must survive a round-trip");
    restored
}

#[test]
fn test_roundtrip_default_bindings() {
    roundtrip_bindings(CommandBindings::default());
}

#[test]
fn test_roundtrip_fully_rebound_vocabulary() {
    let bindings = CommandBindings {
        left_click: "tap".to_string(),
        right_click: "menu".to_string(),
        double_click: "launch".to_string(),
        minimise: "shrink".to_string(),
        maximise: "grow".to_string(),
        close: "dismiss".to_string(),
        scroll_up: "rise".to_string(),
        scroll_down: "fall".to_string(),
        back: "undo".to_string(),
    };

    roundtrip_bindings(bindings);
}

#[test]
fn test_roundtrip_values_with_spaces_and_punctuation() {
    // Any value free of the "++" and "::" tokens must survive unchanged.
    let mut bindings = CommandBindings::default();
    bindings.left_click = "left click now!".to_string();
    bindings.close = "shut-it".to_string();

    roundtrip_bindings(bindings);
}

#[test]
fn test_roundtrip_custom_commands() {
    let commands = vec![
        CustomCommand {
            trigger: "editor".to_string(),
            path: "C:\\Program Files\\Editor\\editor.exe".to_string(),
        },
        CustomCommand {
            trigger: "player".to_string(),
            path: "/usr/bin/player".to_string(),
        },
    ];

    let stored = legacy::serialize_custom_commands(&commands);
    let restored = legacy::parse_custom_commands(&stored);

    assert_eq!(restored, commands);
}

#[test]
fn test_restored_bindings_drive_dispatch() {
    // Arrange – a rebound vocabulary written by an old release
    let stored = "mouseleftbutton::tap++mouserightbutton::menu++scrollup::rise++";

    // Act
    let bindings = legacy::parse_bindings(stored);
    let table = CommandTable::new(bindings, Vec::new());

    // Assert – rebound words dispatch, untouched defaults still dispatch
    assert_eq!(table.dispatch("tap"), Some(ControlAction::ClickLeft));
    assert_eq!(table.dispatch("menu"), Some(ControlAction::ClickRight));
    assert_eq!(table.dispatch("rise"), Some(ControlAction::ScrollUp));
    assert_eq!(table.dispatch("open"), Some(ControlAction::DoubleClick));
    assert_eq!(table.dispatch("select"), None);
}

#[test]
fn test_restored_custom_commands_drive_dispatch_in_order() {
    let stored = "/opt/a::go++/opt/b::go++";

    let table = CommandTable::new(CommandBindings::default(), legacy::parse_custom_commands(stored));

    assert_eq!(table.dispatch("go"), Some(ControlAction::Launch("/opt/a".to_string())));
}
