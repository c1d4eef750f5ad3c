//! Settings codecs.
//!
//! The agent's primary settings format is structured TOML, handled in the
//! agent's storage layer. This module holds the codec for the legacy flat
//! string format, kept so preferences saved by older releases can be
//! migrated in one shot.

pub mod legacy;
