//! # opdesk-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceDirectory` — list and save appointment services
//!   - `LocationDirectory` — tag-filtered location lookup
//!   - `SpecialityDirectory` — speciality lookup
//! - Define **UI-side ports** the host screen implements:
//!   - `Notifier` — transient info/error messages
//!   - `Navigator` — in-app state transitions
//!   - `ConfirmDialog` — the save/discard/cancel modal
//! - Resolve the host's feature flags into a typed [`config::FormConfig`]
//!   once at startup
//! - Drive the appointment-service form: initialization fetches, name
//!   uniqueness validation, the save pipeline, and the unsaved-changes
//!   transition guard
//! - Provide **in-process infrastructure** (notification bus) that doesn't
//!   need IO
//!
//! ## Dependency rule
//! Depends on `opdesk-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod config;
pub mod form;
pub mod guard;
pub mod notify_bus;
pub mod ports;
pub mod services;
