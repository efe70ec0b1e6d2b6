//! Error types for the causer resolver module.

use thiserror::Error;

/// Errors that can occur when resolving a causer.
#[derive(Debug, Error)]
pub enum CauserResolverError {
    /// Neither the resolver callback nor the identifier lookup produced a
    /// usable causer. `value` is the offending callback output or identifier.
    #[error("could not determine a user with identifier `{value}`")]
    CouldNotDetermineCauser { value: String },

    /// The auth manager has no guard registered under this name.
    #[error("auth guard [{name}] is not defined")]
    GuardNotDefined { name: String },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CauserResolverError {
    #[must_use]
    pub fn could_not_determine(value: impl Into<String>) -> Self {
        Self::CouldNotDetermineCauser {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn guard_not_defined(name: impl Into<String>) -> Self {
        Self::GuardNotDefined { name: name.into() }
    }
}
