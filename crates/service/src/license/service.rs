use models::license::{self, License};
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::seed::SeedSource;
use crate::settings::SettingsPort;

/// Result of the first-access check performed on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// A catalog was already stored; nothing was written.
    AlreadyPresent,
    /// The store was empty and the seed dataset was written to it.
    Seeded { entries: usize },
    /// The store was empty and the seed could not be read, did not parse, or
    /// repeated an identifier. The catalog stays empty for this session.
    Unavailable { reason: String },
}

/// License catalog stored as one serialized blob under a settings key.
///
/// Every operation reads the whole catalog from the settings port, works on
/// an owned copy and, when something changed, writes the whole catalog back
/// sorted by identifier. Calls are expected to be serialized by the caller;
/// see [`super::SharedCatalog`] for a locked wrapper.
pub struct LicenseCatalogService<S> {
    settings: S,
    key: String,
    seed_outcome: SeedOutcome,
}

impl<S: SettingsPort> LicenseCatalogService<S> {
    /// Bind to `key` in `settings`, seeding it from `seed` when empty.
    ///
    /// A seed that cannot be used is not an error: it is reported through
    /// [`Self::seed_outcome`] for the caller to log. Only a failed write of the seed fails
    /// construction.
    pub fn new(settings: S, key: impl Into<String>, seed: &dyn SeedSource) -> Result<Self, ServiceError> {
        let key = key.into();
        let seed_outcome = bootstrap(&settings, &key, seed)?;
        Ok(Self { settings, key, seed_outcome })
    }

    pub fn seed_outcome(&self) -> &SeedOutcome {
        &self.seed_outcome
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Owned copy of the current catalog in stored order.
    pub fn licenses(&self) -> Result<Vec<License>, ServiceError> {
        let blob = self.settings.get_string(&self.key);
        Ok(license::deserialize(blob.as_deref())?)
    }

    pub fn find(&self, identifier: &str) -> Result<Option<License>, ServiceError> {
        Ok(self.licenses()?.into_iter().find(|l| l.identifier == identifier))
    }

    /// All identifiers, each followed by `;`.
    pub fn list_identifiers(&self) -> Result<String, ServiceError> {
        Ok(license::identifiers_joined(&self.licenses()?))
    }

    pub fn add_license(&self, name: &str, identifier: &str, status: &str) -> Result<bool, ServiceError> {
        self.add(License::new(name, identifier, status))
    }

    /// Insert `new_license`; `false` if its identifier is already taken.
    pub fn add(&self, new_license: License) -> Result<bool, ServiceError> {
        let mut licenses = self.licenses()?;
        if license::contains_identifier(&licenses, &new_license.identifier) {
            debug!(identifier = %new_license.identifier, "license already in catalog");
            return Ok(false);
        }
        let identifier = new_license.identifier.clone();
        licenses.push(new_license);
        self.persist(&licenses)?;
        info!(%identifier, entries = licenses.len(), "license added");
        Ok(true)
    }

    /// Remove the entry for `identifier`; `false` if there was none.
    pub fn delete_license(&self, identifier: &str) -> Result<bool, ServiceError> {
        let licenses = self.licenses()?;
        let before = licenses.len();
        let remaining: Vec<License> = licenses.into_iter().filter(|l| l.identifier != identifier).collect();
        if remaining.len() == before {
            debug!(%identifier, "delete: license not found");
            return Ok(false);
        }
        self.persist(&remaining)?;
        info!(%identifier, entries = remaining.len(), "license deleted");
        Ok(true)
    }

    /// Replace name and status of the entry for `identifier`; `false` if there was none.
    pub fn update_license(&self, identifier: &str, new_name: &str, new_status: &str) -> Result<bool, ServiceError> {
        let mut licenses = self.licenses()?;
        let Some(existing) = licenses.iter_mut().find(|l| l.identifier == identifier) else {
            debug!(%identifier, "update: license not found");
            return Ok(false);
        };
        existing.name = new_name.to_string();
        existing.status = new_status.to_string();
        self.persist(&licenses)?;
        info!(%identifier, status = %new_status, "license updated");
        Ok(true)
    }

    fn persist(&self, licenses: &[License]) -> Result<(), ServiceError> {
        let blob = license::serialize(&license::sorted_copy(licenses))?;
        self.settings.write(&self.key, &blob)?;
        Ok(())
    }
}

fn bootstrap<S: SettingsPort>(settings: &S, key: &str, seed: &dyn SeedSource) -> Result<SeedOutcome, ServiceError> {
    if settings.get_string(key).is_some_and(|v| !v.trim().is_empty()) {
        return Ok(SeedOutcome::AlreadyPresent);
    }

    let text = match seed.read() {
        Ok(text) => text,
        Err(e) => {
            debug!(seed = seed.name(), error = %e, "could not load seed license list");
            return Ok(SeedOutcome::Unavailable { reason: e.to_string() });
        }
    };
    // The seed is forwarded as-is, but it must already be a valid catalog.
    let list = match license::deserialize(Some(&text)) {
        Ok(list) => list,
        Err(e) => {
            debug!(seed = seed.name(), error = %e, "seed license list is not a valid catalog");
            return Ok(SeedOutcome::Unavailable { reason: e.to_string() });
        }
    };
    if let Some(id) = license::duplicate_identifier(&list) {
        debug!(seed = seed.name(), identifier = %id, "seed license list repeats an identifier");
        return Ok(SeedOutcome::Unavailable { reason: format!("duplicate identifier in seed: {id}") });
    }
    let entries = list.len();

    settings.write(key, &text)?;
    info!(%key, seed = seed.name(), entries, "license catalog seeded");
    Ok(SeedOutcome::Seeded { entries })
}
