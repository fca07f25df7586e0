use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// JSON settings file holding the catalog blob.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    /// Settings key the catalog is stored under.
    #[serde(default = "default_license_key")]
    pub license_key: String,
    /// Seed list used instead of the bundled one.
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { settings_file: default_settings_file(), license_key: default_license_key(), seed_file: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_settings_file() -> String { "data/settings.json".into() }
fn default_license_key() -> String { "licensecheck.licenses".into() }
fn default_log_format() -> String { "compact".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.catalog.normalize_from_env();
        self.catalog.validate()?;
        self.logging.normalize()?;
        Ok(())
    }
}

impl CatalogConfig {
    /// Fill fields from `LICENSE_SETTINGS_FILE` / `LICENSE_SEED_FILE` when set.
    pub fn normalize_from_env(&mut self) {
        if let Ok(path) = std::env::var("LICENSE_SETTINGS_FILE") {
            if !path.trim().is_empty() {
                self.settings_file = path;
            }
        }
        if let Ok(path) = std::env::var("LICENSE_SEED_FILE") {
            if !path.trim().is_empty() {
                self.seed_file = Some(path);
            }
        }
        if self.seed_file.as_deref().is_some_and(|s| s.trim().is_empty()) {
            self.seed_file = None;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.settings_file.trim().is_empty() {
            return Err(anyhow!("catalog.settings_file must not be empty"));
        }
        if self.license_key.trim().is_empty() {
            return Err(anyhow!("catalog.license_key must not be empty"));
        }
        Ok(())
    }

    /// Directory that must exist before the settings file can be written.
    pub fn data_dir(&self) -> String {
        std::path::Path::new(&self.settings_file)
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ".".to_string())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) -> Result<()> {
        let format = self.format.trim().to_ascii_lowercase();
        match format.as_str() {
            "" => self.format = default_log_format(),
            "compact" | "json" => self.format = format,
            other => return Err(anyhow!("logging.format must be compact or json, got {other}")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let mut cfg: AppConfig = toml::from_str("").expect("parse");
        cfg.logging.normalize().expect("normalize");
        assert_eq!(cfg.catalog.settings_file, "data/settings.json");
        assert_eq!(cfg.catalog.license_key, "licensecheck.licenses");
        assert_eq!(cfg.catalog.seed_file, None);
        assert_eq!(cfg.logging.format, "compact");
        assert_eq!(cfg.catalog.data_dir(), "data");
    }

    #[test]
    fn sections_override_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [catalog]
            settings_file = "/var/lib/lc/settings.json"
            license_key = "custom.key"
            seed_file = "seed.json"

            [logging]
            format = "JSON"
            "#,
        )
        .expect("parse");
        let mut logging = cfg.logging.clone();
        logging.normalize().expect("normalize");
        assert_eq!(logging.format, "json");
        assert_eq!(cfg.catalog.license_key, "custom.key");
        assert_eq!(cfg.catalog.seed_file.as_deref(), Some("seed.json"));
        assert_eq!(cfg.catalog.data_dir(), "/var/lib/lc");
    }

    #[test]
    fn validation_rejects_blank_key_and_unknown_format() {
        let catalog = CatalogConfig { license_key: "  ".into(), ..CatalogConfig::default() };
        assert!(catalog.validate().is_err());
        let mut logging = LoggingConfig { format: "xml".into() };
        assert!(logging.normalize().is_err());
    }

    #[test]
    fn bare_file_name_lives_in_current_dir() {
        let catalog = CatalogConfig { settings_file: "settings.json".into(), ..CatalogConfig::default() };
        assert_eq!(catalog.data_dir(), ".");
    }
}
