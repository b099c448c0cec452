//! Weekly availability — day-of-week scoped time windows that override a
//! service's default operating hours.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::{ClockTime, wire_time};

/// Day of the week, serialized in the backend's upper-case wire form
/// (`"SUNDAY"`, `"MONDAY"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sunday => "SUNDAY",
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
        };
        f.write_str(name)
    }
}

/// A day-of-week + start/end time pair attached to a service.
///
/// When at least one slot exists, the service-level start/end times are
/// considered stale and are cleared before submission (see
/// [`ServiceDraft::clear_stale_fields`](crate::draft::ServiceDraft::clear_stale_fields)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAvailabilitySlot {
    pub day_of_week: DayOfWeek,
    #[serde(with = "wire_time")]
    pub start_time: ClockTime,
    #[serde(with = "wire_time")]
    pub end_time: ClockTime,
    /// Per-slot appointment load limit, overriding the service-level one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_appointments_limit: Option<i32>,
}

impl WeeklyAvailabilitySlot {
    /// Create a slot, enforcing that it ends after it starts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SlotTimeOrder`] when `end <= start`.
    pub fn new(
        day_of_week: DayOfWeek,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::SlotTimeOrder);
        }
        Ok(Self {
            day_of_week,
            start_time,
            end_time,
            max_appointments_limit: None,
        })
    }

    /// Attach a per-slot appointment load limit.
    #[must_use]
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.max_appointments_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn at(hour: u32, min: u32) -> ClockTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn should_build_slot_when_end_is_after_start() {
        let slot = WeeklyAvailabilitySlot::new(DayOfWeek::Monday, at(9, 0), at(12, 30)).unwrap();
        assert_eq!(slot.day_of_week, DayOfWeek::Monday);
        assert!(slot.max_appointments_limit.is_none());
    }

    #[test]
    fn should_reject_slot_when_end_is_before_start() {
        let result = WeeklyAvailabilitySlot::new(DayOfWeek::Monday, at(12, 30), at(9, 0));
        assert_eq!(result.unwrap_err(), ValidationError::SlotTimeOrder);
    }

    #[test]
    fn should_reject_slot_when_end_equals_start() {
        let result = WeeklyAvailabilitySlot::new(DayOfWeek::Friday, at(9, 0), at(9, 0));
        assert_eq!(result.unwrap_err(), ValidationError::SlotTimeOrder);
    }

    #[test]
    fn should_attach_limit_via_with_limit() {
        let slot = WeeklyAvailabilitySlot::new(DayOfWeek::Sunday, at(8, 0), at(10, 0))
            .unwrap()
            .with_limit(20);
        assert_eq!(slot.max_appointments_limit, Some(20));
    }

    #[test]
    fn should_serialize_day_in_upper_case_wire_form() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, r#""WEDNESDAY""#);
    }

    #[test]
    fn should_serialize_slot_with_wire_times_and_camel_case_keys() {
        let slot = WeeklyAvailabilitySlot::new(DayOfWeek::Sunday, at(8, 0), at(10, 0)).unwrap();
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dayOfWeek": "SUNDAY",
                "startTime": "08:00:00",
                "endTime": "10:00:00",
            })
        );
    }

    #[test]
    fn should_roundtrip_slot_through_serde_json() {
        let slot = WeeklyAvailabilitySlot::new(DayOfWeek::Thursday, at(14, 15), at(18, 45))
            .unwrap()
            .with_limit(8);
        let json = serde_json::to_string(&slot).unwrap();
        let parsed: WeeklyAvailabilitySlot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slot);
    }

    #[test]
    fn should_display_day_in_wire_form() {
        assert_eq!(DayOfWeek::Saturday.to_string(), "SATURDAY");
    }
}
