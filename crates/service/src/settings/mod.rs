//! Settings port: the host application's key/value string store.
//!
//! The catalog only ever needs string values under a single key. A write is
//! one logical operation that lands in two sinks, the live copy and the
//! durable copy.

pub mod memory;

use thiserror::Error;

pub use memory::MemorySettings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(String),
    #[error("corrupt settings file: {0}")]
    Corrupt(String),
}

/// Trait abstraction for settings storage.
/// Implementations can be file-backed, in-memory, or owned by a host process.
pub trait SettingsPort: Send + Sync {
    /// Current live value for `key`.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Update the live/cached copy only.
    fn set_property(&self, key: &str, value: &str);

    /// Persist durably.
    fn save_property(&self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// Single entry point for writes: live copy first, then the durable copy.
    fn write(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.set_property(key, value);
        self.save_property(key, value)
    }
}

impl<T: SettingsPort + ?Sized> SettingsPort for std::sync::Arc<T> {
    fn get_string(&self, key: &str) -> Option<String> { (**self).get_string(key) }
    fn set_property(&self, key: &str, value: &str) { (**self).set_property(key, value) }
    fn save_property(&self, key: &str, value: &str) -> Result<(), SettingsError> { (**self).save_property(key, value) }
    fn write(&self, key: &str, value: &str) -> Result<(), SettingsError> { (**self).write(key, value) }
}
