//! Input module containing the synthetic event model and the coordinate mapper.

pub mod coords;
pub mod event;

pub use coords::{normalize, ABSOLUTE_MAX};
pub use event::{MouseButton, SyntheticInputEvent, VirtualKey};
