//! REST adapter error types.

use opdesk_domain::error::OpdeskError;

/// Errors specific to the REST directory adapter.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),

    /// The HTTP request itself failed (connection, timeout, TLS).
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend answered {status} for {path}")]
    Status {
        /// HTTP status code received.
        status: u16,
        /// Request path, relative to the base URL.
        path: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {path}")]
    Decode {
        /// Request path, relative to the base URL.
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<RestError> for OpdeskError {
    fn from(err: RestError) -> Self {
        OpdeskError::directory(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = RestError::Status {
            status: 502,
            path: "appointmentService".to_string(),
        };
        assert_eq!(err.to_string(), "backend answered 502 for appointmentService");
    }

    #[test]
    fn should_display_invalid_base_url_error() {
        let err = RestError::InvalidBaseUrl("not a url".to_string());
        assert_eq!(err.to_string(), "invalid base URL \"not a url\"");
    }

    #[test]
    fn should_convert_to_directory_error() {
        let err: OpdeskError = RestError::Status {
            status: 404,
            path: "speciality/all".to_string(),
        }
        .into();
        assert!(matches!(err, OpdeskError::Directory(_)));
    }
}
