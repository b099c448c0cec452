//! # opdesk-adapter-rest
//!
//! REST directory adapter — implements the `opdesk-app` directory ports
//! against the hospital backend's REST API.
//!
//! ## Endpoints
//!
//! | Port | Method | Path |
//! |------|--------|------|
//! | `ServiceDirectory::get_all_services` | GET | `appointmentService/all/default` |
//! | `ServiceDirectory::save` | POST | `appointmentService` |
//! | `LocationDirectory::get_all_by_tag` | GET | `location?tags={tag}&v=default` |
//! | `SpecialityDirectory::get_all_specialities` | GET | `speciality/all` |
//!
//! List responses arrive in the backend's `{"results": [...]}` envelope,
//! except the service listing which is a bare array.
//!
//! ## Dependency rule
//!
//! Depends on `opdesk-app` (for the port traits) and `opdesk-domain`;
//! never the other way around.

mod client;
mod error;
mod location_directory;
mod service_directory;
mod speciality_directory;

pub use client::{RestClient, RestConfig};
pub use error::RestError;
pub use location_directory::RestLocationDirectory;
pub use service_directory::RestServiceDirectory;
pub use speciality_directory::RestSpecialityDirectory;
