//! Application layer use cases for the agent.
//!
//! # What use cases does the agent have?
//!
//! - **`inject_input`** – Translates controller intents (click, move,
//!   scroll, key combo) into batches of [`handsfree_core::SyntheticInputEvent`]
//!   and submits them through the [`inject_input::InputSink`] capability
//!   boundary. The actual OS call is made by an adapter injected at
//!   construction time.
//!
//! - **`dispatch_command`** – Resolves a recognized utterance through the
//!   core dispatch table and executes the resulting action: injection
//!   intents, program launches, or flipping the shared tracking flag.
//!
//! - **`track_hand`** – Forwards tracked-hand frames to the cursor while
//!   the tracking flag is enabled, deduplicating stationary frames.

pub mod dispatch_command;
pub mod inject_input;
pub mod track_hand;
