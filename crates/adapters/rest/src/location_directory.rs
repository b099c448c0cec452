//! [`LocationDirectory`] implementation over the tag-filtered location
//! endpoint.

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;

use opdesk_app::ports::LocationDirectory;
use opdesk_domain::error::OpdeskError;
use opdesk_domain::id::LocationId;
use opdesk_domain::location::Location;

use crate::client::{Results, RestClient};

const LOCATION_PATH: &str = "location";

/// REST-backed location directory.
pub struct RestLocationDirectory {
    client: Arc<RestClient>,
}

impl RestLocationDirectory {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationDto {
    uuid: LocationId,
    display: String,
}

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Self {
            id: dto.uuid,
            display: dto.display,
        }
    }
}

impl LocationDirectory for RestLocationDirectory {
    fn get_all_by_tag(
        &self,
        tag: &str,
    ) -> impl Future<Output = Result<Vec<Location>, OpdeskError>> + Send {
        async move {
            let envelope: Results<LocationDto> = self
                .client
                .get_json(LOCATION_PATH, &[("tags", tag), ("v", "default")])
                .await?;
            Ok(envelope.results.into_iter().map(Location::from).collect())
        }
    }
}
