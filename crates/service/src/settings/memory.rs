use std::{collections::HashMap, sync::RwLock};

use super::{SettingsError, SettingsPort};

/// In-memory settings with separate live and durable maps.
/// Useful for embedding and for observing both write sinks in tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    live: RwLock<HashMap<String, String>>,
    durable: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already present in both sinks.
    pub fn with_value(key: &str, value: &str) -> Self {
        let s = Self::new();
        s.live_mut().insert(key.to_string(), value.to_string());
        s.durable_mut().insert(key.to_string(), value.to_string());
        s
    }

    /// Value last written to the durable sink.
    pub fn durable(&self, key: &str) -> Option<String> {
        self.durable.read().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }

    fn live_mut(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.live.write().unwrap_or_else(|e| e.into_inner())
    }

    fn durable_mut(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.durable.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl SettingsPort for MemorySettings {
    fn get_string(&self, key: &str) -> Option<String> {
        self.live.read().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }

    fn set_property(&self, key: &str, value: &str) {
        self.live_mut().insert(key.to_string(), value.to_string());
    }

    fn save_property(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.durable_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_fans_out_to_both_sinks() -> Result<(), SettingsError> {
        let s = MemorySettings::new();
        s.set_property("k", "cached");
        assert_eq!(s.get_string("k").as_deref(), Some("cached"));
        assert_eq!(s.durable("k"), None);

        s.write("k", "v")?;
        assert_eq!(s.get_string("k").as_deref(), Some("v"));
        assert_eq!(s.durable("k").as_deref(), Some("v"));
        Ok(())
    }
}
