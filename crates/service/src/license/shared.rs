use std::sync::{Arc, Mutex, MutexGuard};

use models::License;

use super::service::{LicenseCatalogService, SeedOutcome};
use crate::errors::ServiceError;
use crate::settings::SettingsPort;

/// Catalog service behind a single mutex.
///
/// Each call holds the lock for its whole read-modify-write, so concurrent
/// callers cannot lose each other's updates.
pub struct SharedCatalog<S> {
    inner: Mutex<LicenseCatalogService<S>>,
}

impl<S: SettingsPort> SharedCatalog<S> {
    pub fn new(service: LicenseCatalogService<S>) -> Arc<Self> {
        Arc::new(Self { inner: Mutex::new(service) })
    }

    fn lock(&self) -> MutexGuard<'_, LicenseCatalogService<S>> {
        // the service keeps no catalog state between calls, so poisoning is ignored
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn seed_outcome(&self) -> SeedOutcome { self.lock().seed_outcome().clone() }
    pub fn licenses(&self) -> Result<Vec<License>, ServiceError> { self.lock().licenses() }
    pub fn find(&self, identifier: &str) -> Result<Option<License>, ServiceError> { self.lock().find(identifier) }
    pub fn list_identifiers(&self) -> Result<String, ServiceError> { self.lock().list_identifiers() }
    pub fn add_license(&self, name: &str, identifier: &str, status: &str) -> Result<bool, ServiceError> {
        self.lock().add_license(name, identifier, status)
    }
    pub fn add(&self, license: License) -> Result<bool, ServiceError> { self.lock().add(license) }
    pub fn delete_license(&self, identifier: &str) -> Result<bool, ServiceError> { self.lock().delete_license(identifier) }
    pub fn update_license(&self, identifier: &str, new_name: &str, new_status: &str) -> Result<bool, ServiceError> {
        self.lock().update_license(identifier, new_name, new_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::StaticSeed;
    use crate::settings::MemorySettings;

    #[test]
    fn concurrent_adds_are_not_lost() {
        let svc = LicenseCatalogService::new(MemorySettings::new(), "k", &StaticSeed("[]".into())).unwrap();
        let shared = SharedCatalog::new(svc);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        let id = format!("L-{t}-{i}");
                        assert!(shared.add_license(&id, &id, "unknown").unwrap());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("worker");
        }

        let all = shared.licenses().unwrap();
        assert_eq!(all.len(), 80);
        assert!(all.windows(2).all(|w| w[0].identifier < w[1].identifier));
    }
}
