//! Seed datasets used to initialise an empty catalog.

use std::{io, path::PathBuf};

/// Resource name of the bundled reference list.
pub const BUNDLED_SEED_NAME: &str = "spdx_license_list.json";

const BUNDLED_SEED: &str = include_str!("../resources/spdx_license_list.json");

/// Source of the default catalog, already in the persisted blob format.
pub trait SeedSource {
    /// Name used in log lines.
    fn name(&self) -> &str;

    /// Read the whole dataset.
    fn read(&self) -> io::Result<String>;
}

/// Reference license list compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSeed;

impl SeedSource for BundledSeed {
    fn name(&self) -> &str {
        BUNDLED_SEED_NAME
    }

    fn read(&self) -> io::Result<String> {
        Ok(BUNDLED_SEED.to_string())
    }
}

/// Seed dataset read from disk, for deployments that ship their own list.
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
    name: String,
}

impl FileSeed {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl SeedSource for FileSeed {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

/// Fixed dataset, handy for embedding a small list.
#[derive(Debug, Clone)]
pub struct StaticSeed(pub String);

impl SeedSource for StaticSeed {
    fn name(&self) -> &str {
        "static"
    }

    fn read(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}
