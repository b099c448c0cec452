//! Persistence-shaped appointment service record.
//!
//! This is the wire shape submitted to the service directory: stable
//! camelCase field mapping, times serialized `HH:MM:SS`, directory
//! references flattened to their UUIDs.

use serde::{Deserialize, Serialize};

use crate::availability::WeeklyAvailabilitySlot;
use crate::draft::ServiceDraft;
use crate::error::ValidationError;
use crate::id::{LocationId, SpecialityId};
use crate::service_type::ServiceType;
use crate::time::{ClockTime, wire_time_option};

/// The record shape accepted by `ServiceDirectory::save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentServiceRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location_uuid: Option<LocationId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub speciality_uuid: Option<SpecialityId>,
    #[serde(
        with = "wire_time_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub start_time: Option<ClockTime>,
    #[serde(
        with = "wire_time_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub end_time: Option<ClockTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_appointments_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_mins: Option<i32>,
    pub color: String,
    #[serde(default)]
    pub weekly_availability: Vec<WeeklyAvailabilitySlot>,
    #[serde(default)]
    pub service_types: Vec<ServiceType>,
}

impl TryFrom<&ServiceDraft> for AppointmentServiceRecord {
    type Error = ValidationError;

    /// Stable field mapping from the (normalized) draft.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when the draft has no name —
    /// a persisted service always carries one.
    fn try_from(draft: &ServiceDraft) -> Result<Self, Self::Error> {
        let name = draft
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::EmptyName)?
            .to_string();

        Ok(Self {
            name,
            description: draft.description.clone(),
            location_uuid: draft.location.as_ref().map(|l| l.id),
            speciality_uuid: draft.speciality.as_ref().map(|s| s.id),
            start_time: draft.start_time,
            end_time: draft.end_time,
            max_appointments_limit: draft.max_appointments_limit,
            duration_mins: draft.duration_mins,
            color: draft.color.clone(),
            weekly_availability: draft.weekly_availability.clone(),
            service_types: draft.service_types.clone(),
        })
    }
}
