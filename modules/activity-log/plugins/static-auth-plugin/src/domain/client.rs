//! Auth collaborator implementations for the static auth plugin.
//!
//! Implements `AuthManager`, `Guard` and `UserProvider` on top of the
//! domain service.

use std::sync::Arc;

use async_trait::async_trait;
use causer_resolver_sdk::{
    AuthManager, Causer, CauserId, CauserResolverError, Guard, Lookup, UserProvider,
};

use super::service::{Service, StaticGuard, StaticProvider};

impl AuthManager for Service {
    fn guard(&self, name: Option<&str>) -> Result<Arc<dyn Guard>, CauserResolverError> {
        self.find_guard(name)
            .map(|guard| -> Arc<dyn Guard> { guard.clone() })
            .ok_or_else(|| {
                CauserResolverError::guard_not_defined(name.unwrap_or(&self.default_guard))
            })
    }
}

#[async_trait]
impl Guard for StaticGuard {
    async fn user(&self) -> Option<Causer> {
        let id = self.current.read().clone()?;
        self.provider.as_ref()?.users.get(&id).cloned()
    }

    fn provider(&self) -> Option<Arc<dyn UserProvider>> {
        self.provider
            .clone()
            .map(|p| -> Arc<dyn UserProvider> { p })
    }
}

#[async_trait]
impl UserProvider for StaticProvider {
    async fn retrieve_by_id(&self, id: &CauserId) -> Lookup {
        if !self.lookup {
            return Lookup::Unsupported;
        }
        self.users
            .get(id)
            .cloned()
            .map_or(Lookup::Missing, Lookup::Found)
    }
}
