//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Ensure the data directory exists; warn when an optional seed file is missing.
pub fn ensure_env(data_dir: &str, seed_file: Option<&str>) -> anyhow::Result<()> {
    if let Some(seed) = seed_file {
        if !Path::new(seed).is_file() {
            warn!(%seed, "seed file not found; an empty store will stay unseeded");
        }
    }
    std::fs::create_dir_all(data_dir)
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_data_dir() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("common_env_{}", uuid::Uuid::new_v4()));
        let data = root.join("data");
        let data_str = data.to_string_lossy().to_string();
        ensure_env(&data_str, Some("does/not/exist.json"))?;
        assert!(data.is_dir());
        let _ = std::fs::remove_dir_all(&root);
        Ok(())
    }
}
