//! Location — a place where appointment services run, as returned by the
//! location directory.

use serde::{Deserialize, Serialize};

use crate::id::LocationId;

/// A location entry from a tag-filtered directory query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Human-readable name shown in the form's location picker.
    pub display: String,
}

impl Location {
    #[must_use]
    pub fn new(id: LocationId, display: impl Into<String>) -> Self {
        Self {
            id,
            display: display.into(),
        }
    }
}
