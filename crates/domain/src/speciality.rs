//! Speciality — a clinical speciality a service can be associated with.

use serde::{Deserialize, Serialize};

use crate::id::SpecialityId;

/// A speciality entry from the speciality directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speciality {
    pub id: SpecialityId,
    pub name: String,
}

impl Speciality {
    #[must_use]
    pub fn new(id: SpecialityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
