//! Domain model for the license catalog.
//! - `License` is one whitelist entry keyed by its identifier.
//! - `license` also holds the codec for the persisted catalog blob.

pub mod errors;
pub mod license;

pub use license::License;
