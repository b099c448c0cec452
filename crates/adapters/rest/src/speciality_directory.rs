//! [`SpecialityDirectory`] implementation over the speciality endpoint.

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;

use opdesk_app::ports::SpecialityDirectory;
use opdesk_domain::error::OpdeskError;
use opdesk_domain::id::SpecialityId;
use opdesk_domain::speciality::Speciality;

use crate::client::{Results, RestClient};

const SPECIALITY_PATH: &str = "speciality/all";

/// REST-backed speciality directory.
pub struct RestSpecialityDirectory {
    client: Arc<RestClient>,
}

impl RestSpecialityDirectory {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpecialityDto {
    uuid: SpecialityId,
    name: String,
}

impl From<SpecialityDto> for Speciality {
    fn from(dto: SpecialityDto) -> Self {
        Self {
            id: dto.uuid,
            name: dto.name,
        }
    }
}

impl SpecialityDirectory for RestSpecialityDirectory {
    fn get_all_specialities(
        &self,
    ) -> impl Future<Output = Result<Vec<Speciality>, OpdeskError>> + Send {
        async {
            let envelope: Results<SpecialityDto> =
                self.client.get_json(SPECIALITY_PATH, &[]).await?;
            Ok(envelope.results.into_iter().map(Speciality::from).collect())
        }
    }
}
