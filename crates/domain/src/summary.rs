//! Service summary — the shape of entries in the "all services" listing,
//! used for name-uniqueness checks against existing services.

use serde::{Deserialize, Serialize};

use crate::id::ServiceId;

/// A persisted service as listed by the service directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: ServiceId,
    pub name: String,
    pub description: Option<String>,
}

impl ServiceSummary {
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id: ServiceId::new(),
            name: name.into(),
            description: description.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_serde_json() {
        let summary = ServiceSummary::new("Oncology", Some("Cancer treatment"));
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: ServiceSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
