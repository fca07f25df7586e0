use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One catalog entry.
/// - name: display label, e.g. `MIT License`
/// - identifier: unique key, e.g. `MIT` (compared case-sensitively)
/// - status: approval state such as `allowed`, `denied` or `unknown`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct License {
    pub name: String,
    pub identifier: String,
    pub status: String,
}

impl License {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), identifier: identifier.into(), status: status.into() }
    }
}

// Identifier first; name and status only break ties so the order stays total.
impl Ord for License {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier
            .cmp(&other.identifier)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.status.cmp(&other.status))
    }
}

impl PartialOrd for License {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse a persisted catalog blob.
///
/// A missing, empty or whitespace-only blob means no catalog has been written
/// yet and yields an empty list. Anything else must be a JSON array of
/// licenses; malformed input is reported, never replaced by an empty catalog.
pub fn deserialize(blob: Option<&str>) -> Result<Vec<License>, ModelError> {
    match blob.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text).map_err(|e| ModelError::Malformed(e.to_string())),
    }
}

/// Encode licenses as the canonical blob, preserving the given order.
pub fn serialize(licenses: &[License]) -> Result<String, ModelError> {
    serde_json::to_string(licenses).map_err(|e| ModelError::Encode(e.to_string()))
}

/// Copy of `licenses` in ascending identifier order.
pub fn sorted_copy(licenses: &[License]) -> Vec<License> {
    let mut sorted = licenses.to_vec();
    sorted.sort();
    sorted
}

pub fn contains_identifier(licenses: &[License], identifier: &str) -> bool {
    licenses.iter().any(|l| l.identifier == identifier)
}

/// First identifier that appears more than once, if any.
pub fn duplicate_identifier(licenses: &[License]) -> Option<&str> {
    let mut seen = HashSet::new();
    licenses.iter().map(|l| l.identifier.as_str()).find(|id| !seen.insert(*id))
}

pub fn has_unique_identifiers(licenses: &[License]) -> bool {
    duplicate_identifier(licenses).is_none()
}

/// Every identifier followed by `;`, the last one included.
pub fn identifiers_joined(licenses: &[License]) -> String {
    licenses.iter().fold(String::new(), |mut out, l| {
        out.push_str(&l.identifier);
        out.push(';');
        out
    })
}
