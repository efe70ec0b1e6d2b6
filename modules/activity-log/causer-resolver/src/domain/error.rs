//! Domain errors for the causer resolver.

use causer_resolver_sdk::CauserResolverError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("could not determine a user with identifier `{value}`")]
    CouldNotDetermineCauser { value: String },

    #[error("auth guard [{name}] is not defined")]
    GuardNotDefined { name: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn could_not_determine(value: impl Into<String>) -> Self {
        Self::CouldNotDetermineCauser {
            value: value.into(),
        }
    }
}

impl From<CauserResolverError> for DomainError {
    fn from(e: CauserResolverError) -> Self {
        match e {
            CauserResolverError::CouldNotDetermineCauser { value } => {
                Self::CouldNotDetermineCauser { value }
            }
            CauserResolverError::GuardNotDefined { name } => Self::GuardNotDefined { name },
            CauserResolverError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for CauserResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CouldNotDetermineCauser { value } => {
                Self::CouldNotDetermineCauser { value }
            }
            DomainError::GuardNotDefined { name } => Self::GuardNotDefined { name },
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}
