//! Auth collaborator traits.
//!
//! The host application supplies these. The resolver only depends on the
//! contract below; credential checks, sessions and user storage live behind
//! the implementations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CauserResolverError;
use crate::models::{Causer, CauserId, Lookup};

/// Entry point into the host's authentication subsystem.
pub trait AuthManager: Send + Sync {
    /// Get the guard registered under `name`, or the default guard for `None`.
    ///
    /// # Errors
    ///
    /// - `GuardNotDefined` if no guard exists under `name`
    fn guard(&self, name: Option<&str>) -> Result<Arc<dyn Guard>, CauserResolverError>;
}

/// One authentication scheme (session, token, ...).
#[async_trait]
pub trait Guard: Send + Sync {
    /// The currently authenticated principal, if any.
    async fn user(&self) -> Option<Causer>;

    /// The identity provider backing this guard.
    ///
    /// Guards that cannot look principals up by identifier keep the default.
    fn provider(&self) -> Option<Arc<dyn UserProvider>> {
        None
    }
}

/// Identity lookup associated with a guard.
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Retrieve a principal by its identifier.
    ///
    /// Providers without id lookup keep the default, which answers
    /// [`Lookup::Unsupported`].
    async fn retrieve_by_id(&self, _id: &CauserId) -> Lookup {
        Lookup::Unsupported
    }
}
