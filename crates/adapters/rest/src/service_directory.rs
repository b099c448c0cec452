//! [`ServiceDirectory`] implementation over the appointment-service
//! endpoints.

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;

use opdesk_app::ports::ServiceDirectory;
use opdesk_domain::error::OpdeskError;
use opdesk_domain::id::ServiceId;
use opdesk_domain::record::AppointmentServiceRecord;
use opdesk_domain::summary::ServiceSummary;

use crate::client::RestClient;

const ALL_SERVICES_PATH: &str = "appointmentService/all/default";
const SAVE_SERVICE_PATH: &str = "appointmentService";

/// REST-backed appointment-service directory.
pub struct RestServiceDirectory {
    client: Arc<RestClient>,
}

impl RestServiceDirectory {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

/// Listing entry as served by the backend.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceSummaryDto {
    uuid: ServiceId,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<ServiceSummaryDto> for ServiceSummary {
    fn from(dto: ServiceSummaryDto) -> Self {
        Self {
            id: dto.uuid,
            name: dto.name,
            description: dto.description,
        }
    }
}

impl ServiceDirectory for RestServiceDirectory {
    fn get_all_services(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceSummary>, OpdeskError>> + Send {
        async {
            let dtos: Vec<ServiceSummaryDto> =
                self.client.get_json(ALL_SERVICES_PATH, &[]).await?;
            Ok(dtos.into_iter().map(ServiceSummary::from).collect())
        }
    }

    fn save(
        &self,
        record: AppointmentServiceRecord,
    ) -> impl Future<Output = Result<(), OpdeskError>> + Send {
        async move {
            self.client.post_json(SAVE_SERVICE_PATH, &record).await?;
            Ok(())
        }
    }
}
