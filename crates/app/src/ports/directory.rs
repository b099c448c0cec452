//! Directory ports — backend collaborators reached over the network.
//!
//! The backing services are external to this system; only their
//! call/response contracts are specified here.

use std::future::Future;
use std::sync::Arc;

use opdesk_domain::error::OpdeskError;
use opdesk_domain::location::Location;
use opdesk_domain::record::AppointmentServiceRecord;
use opdesk_domain::speciality::Speciality;
use opdesk_domain::summary::ServiceSummary;

/// Lists and persists appointment services.
pub trait ServiceDirectory {
    /// Fetch every persisted appointment service.
    fn get_all_services(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceSummary>, OpdeskError>> + Send;

    /// Persist a service record.
    fn save(
        &self,
        record: AppointmentServiceRecord,
    ) -> impl Future<Output = Result<(), OpdeskError>> + Send;
}

/// Tag-filtered location lookup.
pub trait LocationDirectory {
    /// Fetch all locations carrying the given tag.
    fn get_all_by_tag(
        &self,
        tag: &str,
    ) -> impl Future<Output = Result<Vec<Location>, OpdeskError>> + Send;
}

/// Speciality lookup.
pub trait SpecialityDirectory {
    /// Fetch all clinical specialities.
    fn get_all_specialities(
        &self,
    ) -> impl Future<Output = Result<Vec<Speciality>, OpdeskError>> + Send;
}

impl<T: ServiceDirectory + Send + Sync> ServiceDirectory for Arc<T> {
    fn get_all_services(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceSummary>, OpdeskError>> + Send {
        (**self).get_all_services()
    }

    fn save(
        &self,
        record: AppointmentServiceRecord,
    ) -> impl Future<Output = Result<(), OpdeskError>> + Send {
        (**self).save(record)
    }
}

impl<T: LocationDirectory + Send + Sync> LocationDirectory for Arc<T> {
    fn get_all_by_tag(
        &self,
        tag: &str,
    ) -> impl Future<Output = Result<Vec<Location>, OpdeskError>> + Send {
        (**self).get_all_by_tag(tag)
    }
}

impl<T: SpecialityDirectory + Send + Sync> SpecialityDirectory for Arc<T> {
    fn get_all_specialities(
        &self,
    ) -> impl Future<Output = Result<Vec<Speciality>, OpdeskError>> + Send {
        (**self).get_all_specialities()
    }
}
