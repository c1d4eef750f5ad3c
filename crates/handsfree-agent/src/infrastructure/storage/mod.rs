//! Storage layer: config persistence.
//!
//! - **`config`** – TOML-backed `AppConfig` load/save at the platform
//!   config directory, plus one-shot migration from the legacy flat-string
//!   settings format.

pub mod config;
