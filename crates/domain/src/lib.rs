//! # opdesk-domain
//!
//! Pure domain model for the opdesk appointment-service administration core.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, wire time format
//! - Define the **ServiceDraft** (the in-progress, unsaved service bound to a form)
//! - Define **WeeklyAvailabilitySlot** (day-of-week scoped time windows)
//! - Define **ServiceType** (sub-categories attached to one service)
//! - Define directory result shapes (**Location**, **Speciality**, **ServiceSummary**)
//! - Define the persistence-shaped **AppointmentServiceRecord** wire record
//! - Contain all invariant enforcement and pre-save normalization rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod availability;
pub mod draft;
pub mod location;
pub mod record;
pub mod service_type;
pub mod speciality;
pub mod summary;
