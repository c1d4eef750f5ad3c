//! Command module containing the utterance dispatch table.

pub mod table;

pub use table::{CommandBindings, CommandTable, ControlAction, CustomCommand};
