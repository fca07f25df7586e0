//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binary crates can call
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the settings data directory exists; warn when the seed override is missing.
pub fn ensure_env(data_dir: &str, seed_file: Option<&str>) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir, seed_file)
}
