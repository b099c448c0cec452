//! Shared HTTP plumbing for the directory implementations.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Configuration for the REST directory adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    /// Base URL of the hospital REST API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/openmrs/ws/rest/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Thin wrapper over [`reqwest::Client`] rooted at the configured base URL.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Build a client from the adapter configuration.
    ///
    /// # Errors
    ///
    /// Fails when the base URL does not parse or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &RestConfig) -> Result<Self, RestError> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|_| RestError::InvalidBaseUrl(config.base_url.clone()))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// GET `path` with the given query pairs and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RestError> {
        tracing::debug!(path, "fetching");
        let response = self.http.get(self.url(path)).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| RestError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// POST `body` as JSON to `path`, expecting only a success status back.
    pub(crate) async fn post_json<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), RestError> {
        tracing::debug!(path, "posting");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

/// The `{"results": [...]}` envelope the backend wraps list responses in.
#[derive(Debug, Deserialize)]
pub(crate) struct Results<T> {
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_backend() {
        let config = RestConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/openmrs/ws/rest/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn should_build_urls_under_the_base() {
        let client = RestClient::new(&RestConfig::default()).unwrap();
        assert_eq!(
            client.url("appointmentService/all/default"),
            "http://localhost:8080/openmrs/ws/rest/v1/appointmentService/all/default"
        );
    }

    #[test]
    fn should_trim_trailing_slash_from_base_url() {
        let config = RestConfig {
            base_url: "https://emr.example.org/openmrs/ws/rest/v1/".to_string(),
            ..RestConfig::default()
        };
        let client = RestClient::new(&config).unwrap();
        assert_eq!(
            client.url("speciality/all"),
            "https://emr.example.org/openmrs/ws/rest/v1/speciality/all"
        );
    }

    #[test]
    fn should_reject_unparseable_base_url() {
        let config = RestConfig {
            base_url: "not a url".to_string(),
            ..RestConfig::default()
        };
        assert!(matches!(
            RestClient::new(&config),
            Err(RestError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn should_decode_results_envelope() {
        let body = r#"{"results": [{"value": 1}, {"value": 2}]}"#;

        #[derive(Debug, Deserialize)]
        struct Item {
            value: u32,
        }

        let parsed: Results<Item> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[1].value, 2);
    }
}
