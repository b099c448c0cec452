//! Typed form configuration, resolved once at startup.
//!
//! The host application exposes feature flags through a string-keyed
//! descriptor (`getValue(key)`). Rather than scattering keyed lookups
//! through the code, the four recognized keys are resolved into this
//! struct exactly once; everything downstream reads named fields.

use serde::Deserialize;

/// Color used when no color list is configured for appointment services.
pub const FALLBACK_COLOR: &str = "#008000";

/// Descriptor keys recognized by [`FormConfig::from_lookup`].
pub mod keys {
    pub const ENABLE_SPECIALITIES: &str = "enableSpecialities";
    pub const ENABLE_SERVICE_TYPES: &str = "enableServiceTypes";
    pub const ENABLE_CALENDAR_VIEW: &str = "enableCalendarView";
    pub const COLORS: &str = "colorsForAppointmentService";
}

/// Feature flags and display settings for the appointment-service form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Show the speciality picker and fetch the speciality list.
    pub enable_specialities: bool,
    /// Show the per-service type editor.
    pub enable_service_types: bool,
    /// Expose the calendar view toggle.
    pub enable_calendar_view: bool,
    /// Configured display colors; the first one is the default for new
    /// drafts.
    pub colors: Vec<String>,
}

impl FormConfig {
    /// Resolve the configuration from a descriptor-style keyed lookup.
    ///
    /// Missing or non-boolean flag values count as disabled; a missing or
    /// malformed color list counts as empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<serde_json::Value>) -> Self {
        let flag = |key| lookup(key).is_some_and(|v| v.as_bool() == Some(true));
        let colors = lookup(keys::COLORS)
            .and_then(|v| {
                v.as_array().map(|entries| {
                    entries
                        .iter()
                        .filter_map(|c| c.as_str().map(str::to_owned))
                        .collect()
                })
            })
            .unwrap_or_default();

        Self {
            enable_specialities: flag(keys::ENABLE_SPECIALITIES),
            enable_service_types: flag(keys::ENABLE_SERVICE_TYPES),
            enable_calendar_view: flag(keys::ENABLE_CALENDAR_VIEW),
            colors,
        }
    }

    /// Default draft color: first configured color, else the fixed
    /// fallback.
    #[must_use]
    pub fn default_color(&self) -> String {
        self.colors
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_COLOR.to_string())
    }
}
