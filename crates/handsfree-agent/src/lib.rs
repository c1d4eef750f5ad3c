//! handsfree-agent library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/` and
//! the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the agent do? (for beginners)
//!
//! The agent is the piece that turns sensor output into real PC input.
//! A depth sensor tracks the user's hand and a speech engine recognizes a
//! small vocabulary of trigger words; both deliver their events to the
//! agent, which:
//!
//! 1. Loads the user's trigger-word bindings and custom launch commands
//!    from the TOML config (migrating legacy flat-string settings when
//!    present).
//! 2. Resolves each recognized utterance through the dispatch table to a
//!    control action: click, scroll, window-management key combo, program
//!    launch, or tracking toggle.
//! 3. While tracking is enabled, converts each tracked-hand frame to an
//!    absolute cursor position on the primary screen.
//! 4. Calls the platform injection API (`SendInput` on Windows) to inject
//!    the events as if the user were physically moving a mouse.

/// Application layer: use cases for the agent.
pub mod application;

/// Infrastructure layer: OS adapters, control-event sources, and storage.
pub mod infrastructure;
