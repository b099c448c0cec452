//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`OpdeskError`]
//! at the boundary — adapters wrap their transport errors via
//! [`OpdeskError::directory`], the domain raises [`ValidationError`] directly.

/// Top-level error for the opdesk workspace.
#[derive(Debug, thiserror::Error)]
pub enum OpdeskError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A directory (backend collaborator) request failed.
    #[error("directory request failed")]
    Directory(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl OpdeskError {
    /// Wrap an adapter-level error as a directory failure.
    #[must_use]
    pub fn directory(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Directory(Box::new(err))
    }
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The service name is required to persist a service.
    #[error("service name must not be empty")]
    EmptyName,

    /// An availability slot must end after it starts.
    #[error("availability slot end time must be after its start time")]
    SlotTimeOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: OpdeskError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            OpdeskError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_expose_source_when_wrapping_directory_error() {
        let inner = std::io::Error::other("connection refused");
        let err = OpdeskError::directory(inner);
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("connection refused"));
    }
}
