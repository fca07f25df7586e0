pub mod service;
pub mod shared;

pub use service::{LicenseCatalogService, SeedOutcome};
pub use shared::SharedCatalog;
