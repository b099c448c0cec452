//! Use-case services driving the admin screens.

pub mod service_form;

pub use service_form::{SaveOutcome, ServiceFormController};
