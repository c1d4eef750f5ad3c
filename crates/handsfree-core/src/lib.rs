//! # handsfree-core
//!
//! Shared library for the hands-free controller containing the synthetic
//! input event model, the screen-space coordinate mapper, the voice command
//! dispatch table, and the legacy settings codec.
//!
//! This crate is used by the agent application. It has zero dependencies on
//! OS APIs, audio/tracking SDKs, or I/O of any kind.
//!
//! # Architecture overview (for beginners)
//!
//! The hands-free controller lets a user drive a PC without touching it: a
//! depth sensor tracks one hand and moves the cursor, while a speech engine
//! recognizes short trigger words ("select", "open", "up", ...) and turns
//! them into clicks, scrolls, key combos, or program launches.
//!
//! This crate (`handsfree-core`) is the pure foundation. It defines:
//!
//! - **`input`** – The [`SyntheticInputEvent`] model (what gets injected into
//!   the OS input queue) and the coordinate mapper that converts screen
//!   pixels into the absolute normalized `[0, 65535]` range the OS injector
//!   expects.
//!
//! - **`command`** – The dispatch table mapping a recognized utterance to a
//!   [`ControlAction`]: the nine configurable trigger words, the fixed
//!   `start`/`stop` tracking toggles, and user-defined launch commands.
//!
//! - **`settings`** – The legacy flat-string settings codec, kept for
//!   one-shot migration of preferences saved by older releases.

pub mod command;
pub mod input;
pub mod settings;

// Re-export the most-used types at the crate root so callers can write
// `handsfree_core::CommandTable` instead of the full module path.
pub use command::table::{CommandBindings, CommandTable, ControlAction, CustomCommand};
pub use input::coords::{normalize, ABSOLUTE_MAX};
pub use input::event::{MouseButton, SyntheticInputEvent, VirtualKey};
