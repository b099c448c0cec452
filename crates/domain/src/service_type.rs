//! Service type — a sub-category attached to one service, each potentially
//! carrying its own duration.

use serde::{Deserialize, Serialize};

/// A named sub-category of an appointment service.
///
/// When at least one type exists, the service-level max-appointments limit
/// is considered stale and is cleared before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    pub name: String,
    /// Slot duration for this type, in minutes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_mins: Option<i32>,
}

impl ServiceType {
    /// Create a type with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration_mins: None,
        }
    }

    /// Attach a duration in minutes.
    #[must_use]
    pub fn with_duration(mut self, mins: i32) -> Self {
        self.duration_mins = Some(mins);
        self
    }
}
