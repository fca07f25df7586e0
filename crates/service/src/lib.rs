//! Service layer for the license catalog.
//! - Reads and writes the catalog through an injected settings port.
//! - Seeds an empty store from the bundled license list.
//! - Reports "did not apply" outcomes as `false`, not as errors.

pub mod errors;
pub mod license;
pub mod runtime;
pub mod seed;
pub mod settings;
pub mod storage;

pub use license::{LicenseCatalogService, SeedOutcome, SharedCatalog};
