//! Local (in-process) client for the causer resolver.

use std::sync::Arc;

use async_trait::async_trait;
use causer_resolver_sdk::{
    Causer, CauserResolverClient, CauserResolverError, ResolverCallback, Subject,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed to the activity log pipeline as `Arc<dyn CauserResolverClient>`.
pub struct CauserResolverLocalClient {
    svc: Arc<Service>,
}

impl CauserResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> CauserResolverError {
    tracing::error!(operation = op, error = ?e, "causer_resolver call failed");
    e.into()
}

#[async_trait]
impl CauserResolverClient for CauserResolverLocalClient {
    async fn resolve(
        &self,
        subject: Option<Subject>,
    ) -> Result<Option<Causer>, CauserResolverError> {
        self.svc
            .resolve(subject)
            .await
            .map_err(|e| log_and_convert("resolve", e))
    }

    fn resolve_using(&self, callback: ResolverCallback) {
        self.svc.set_resolver(callback);
    }

    fn set_causer(&self, causer: Option<Causer>) {
        self.svc.set_causer(causer);
    }
}
