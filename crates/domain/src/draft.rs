//! Service draft — the in-progress, unsaved appointment service bound to
//! the admin form.
//!
//! A draft starts empty apart from a default display color, is mutated by
//! user input and by pre-save normalization, and is converted into an
//! [`AppointmentServiceRecord`](crate::record::AppointmentServiceRecord)
//! on submission.

use serde::{Deserialize, Serialize};

use crate::availability::WeeklyAvailabilitySlot;
use crate::location::Location;
use crate::service_type::ServiceType;
use crate::speciality::Speciality;
use crate::time::ClockTime;

/// The in-progress form entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub speciality: Option<Speciality>,
    /// Service-level opening time; stale once any availability slot exists.
    pub start_time: Option<ClockTime>,
    /// Service-level closing time; stale once any availability slot exists.
    pub end_time: Option<ClockTime>,
    /// Service-level appointment load limit; stale once any type exists.
    pub max_appointments_limit: Option<i32>,
    /// Default appointment duration in minutes.
    pub duration_mins: Option<i32>,
    pub weekly_availability: Vec<WeeklyAvailabilitySlot>,
    pub service_types: Vec<ServiceType>,
    /// Calendar display color. Always set (a fresh draft gets the
    /// configured default) and freely overwritable by the user.
    pub color: String,
}

/// Which stale fields [`ServiceDraft::clear_stale_fields`] actually cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearedStaleFields {
    /// Service-level start/end time were cleared.
    pub times: bool,
    /// Service-level max-appointments limit was cleared.
    pub load_limit: bool,
}

impl ServiceDraft {
    /// Create an empty draft carrying the resolved default color.
    #[must_use]
    pub fn empty(default_color: impl Into<String>) -> Self {
        Self {
            name: None,
            description: None,
            location: None,
            speciality: None,
            start_time: None,
            end_time: None,
            max_appointments_limit: None,
            duration_mins: None,
            weekly_availability: Vec::new(),
            service_types: Vec::new(),
            color: default_color.into(),
        }
    }

    /// Create a builder for constructing a [`ServiceDraft`].
    #[must_use]
    pub fn builder() -> ServiceDraftBuilder {
        ServiceDraftBuilder::default()
    }

    /// Whether the draft holds any user input worth guarding against loss.
    ///
    /// The color field is deliberately excluded: a fresh draft already
    /// carries a default color, so color alone never counts as unsaved
    /// work.
    #[must_use]
    pub fn has_unsaved_input(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.location.is_some()
            || self.speciality.is_some()
            || self.start_time.is_some()
            || self.end_time.is_some()
            || self.max_appointments_limit.is_some()
            || self.duration_mins.is_some()
            || !self.weekly_availability.is_empty()
            || !self.service_types.is_empty()
    }

    /// Pre-save normalization.
    ///
    /// If any weekly availability slot exists, the service-level start and
    /// end times are stale and are cleared. If any service type exists,
    /// the service-level max-appointments limit is stale and is cleared.
    /// The two rules are independent; each fires only when its triggering
    /// list is non-empty.
    pub fn clear_stale_fields(&mut self) -> ClearedStaleFields {
        let mut cleared = ClearedStaleFields::default();
        if !self.weekly_availability.is_empty() {
            self.start_time = None;
            self.end_time = None;
            cleared.times = true;
        }
        if !self.service_types.is_empty() {
            self.max_appointments_limit = None;
            cleared.load_limit = true;
        }
        cleared
    }
}

/// Step-by-step builder for [`ServiceDraft`].
#[derive(Debug, Default)]
pub struct ServiceDraftBuilder {
    name: Option<String>,
    description: Option<String>,
    location: Option<Location>,
    speciality: Option<Speciality>,
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
    max_appointments_limit: Option<i32>,
    duration_mins: Option<i32>,
    weekly_availability: Vec<WeeklyAvailabilitySlot>,
    service_types: Vec<ServiceType>,
    color: Option<String>,
}

impl ServiceDraftBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn speciality(mut self, speciality: Speciality) -> Self {
        self.speciality = Some(speciality);
        self
    }

    #[must_use]
    pub fn start_time(mut self, time: ClockTime) -> Self {
        self.start_time = Some(time);
        self
    }

    #[must_use]
    pub fn end_time(mut self, time: ClockTime) -> Self {
        self.end_time = Some(time);
        self
    }

    #[must_use]
    pub fn max_appointments_limit(mut self, limit: i32) -> Self {
        self.max_appointments_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn duration_mins(mut self, mins: i32) -> Self {
        self.duration_mins = Some(mins);
        self
    }

    #[must_use]
    pub fn availability(mut self, slot: WeeklyAvailabilitySlot) -> Self {
        self.weekly_availability.push(slot);
        self
    }

    #[must_use]
    pub fn service_type(mut self, service_type: ServiceType) -> Self {
        self.service_types.push(service_type);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Consume the builder and return a [`ServiceDraft`].
    #[must_use]
    pub fn build(self) -> ServiceDraft {
        ServiceDraft {
            name: self.name,
            description: self.description,
            location: self.location,
            speciality: self.speciality,
            start_time: self.start_time,
            end_time: self.end_time,
            max_appointments_limit: self.max_appointments_limit,
            duration_mins: self.duration_mins,
            weekly_availability: self.weekly_availability,
            service_types: self.service_types,
            color: self.color.unwrap_or_default(),
        }
    }
}
