//! Storage backends for the settings port.
//!
//! Contains the file-backed store used by the host binary.

pub mod json_settings_store;

pub use json_settings_store::JsonSettingsStore;
