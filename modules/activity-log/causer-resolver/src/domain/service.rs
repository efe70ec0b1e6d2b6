//! Domain service for the causer resolver.

use std::sync::Arc;

use causer_resolver_sdk::{
    AuthManager, CallbackOutput, Causer, CauserId, Guard, Lookup, ResolverCallback, Subject,
};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::error::DomainError;
use crate::config::CauserResolverConfig;

/// Installed overrides. An unset slot means "not configured".
#[derive(Default)]
struct Overrides {
    causer: Option<Causer>,
    resolver: Option<ResolverCallback>,
}

/// Causer resolver service.
///
/// Resolution precedence:
/// 1. fixed causer override
/// 2. resolver callback override
/// 3. the configured guard: subject pass-through, current user, or lookup by id
///
/// Overrides live behind a lock so a shared `Arc<Service>` can be
/// reconfigured from any task. The lock is released before the callback or
/// any collaborator runs.
pub struct Service {
    auth: Arc<dyn AuthManager>,
    auth_driver: Option<String>,
    overrides: RwLock<Overrides>,
}

impl Service {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthManager>, cfg: &CauserResolverConfig) -> Self {
        info!(
            auth_driver = cfg.default_auth_driver.as_deref().unwrap_or("<default>"),
            "Initializing causer_resolver"
        );
        Self {
            auth,
            auth_driver: cfg.default_auth_driver.clone(),
            overrides: RwLock::new(Overrides::default()),
        }
    }

    /// Guard name consulted by default resolution; `None` is the default guard.
    #[must_use]
    pub fn auth_driver(&self) -> Option<&str> {
        self.auth_driver.as_deref()
    }

    /// Install or replace the resolver callback.
    pub fn resolve_using<F>(&self, callback: F) -> &Self
    where
        F: Fn(Option<&Subject>) -> CallbackOutput + Send + Sync + 'static,
    {
        self.set_resolver(Arc::new(callback))
    }

    /// Install or replace an already shared resolver callback.
    pub fn set_resolver(&self, callback: ResolverCallback) -> &Self {
        self.overrides.write().resolver = Some(callback);
        self
    }

    /// Remove the resolver callback, reverting to default resolution.
    pub fn forget_resolver(&self) -> &Self {
        self.overrides.write().resolver = None;
        self
    }

    /// Install or replace the fixed causer. `None` means no override.
    pub fn set_causer(&self, causer: Option<Causer>) -> &Self {
        self.overrides.write().causer = causer;
        self
    }

    /// Resolve the causer for a logging event.
    ///
    /// # Errors
    ///
    /// - `CouldNotDetermineCauser` if the callback yields something other than
    ///   a causer or nothing, or an identifier cannot be looked up
    /// - `GuardNotDefined` if the configured guard does not exist
    #[tracing::instrument(skip_all, fields(auth_driver = ?self.auth_driver))]
    pub async fn resolve(&self, subject: Option<Subject>) -> Result<Option<Causer>, DomainError> {
        let (causer, resolver) = {
            let overrides = self.overrides.read();
            (overrides.causer.clone(), overrides.resolver.clone())
        };

        if let Some(causer) = causer {
            debug!("Using causer override");
            return Ok(Some(causer));
        }

        if let Some(resolver) = resolver {
            debug!("Using resolver callback override");
            return resolver(subject.as_ref()).into_causer().map_err(|invalid| {
                let value = invalid.describe();
                warn!(%value, "Resolver callback returned a value that is not a causer");
                DomainError::could_not_determine(value)
            });
        }

        match subject {
            Some(Subject::Causer(causer)) => Ok(Some(causer)),
            Some(Subject::Id(id)) => self.resolve_by_id(&id).await.map(Some),
            None => self.current_user().await,
        }
    }

    fn guard(&self) -> Result<Arc<dyn Guard>, DomainError> {
        self.auth
            .guard(self.auth_driver.as_deref())
            .map_err(DomainError::from)
    }

    async fn current_user(&self) -> Result<Option<Causer>, DomainError> {
        let user = self.guard()?.user().await;
        debug!(authenticated = user.is_some(), "Resolved current user");
        Ok(user)
    }

    async fn resolve_by_id(&self, id: &CauserId) -> Result<Causer, DomainError> {
        let Some(provider) = self.guard()?.provider() else {
            debug!(%id, "Guard has no user provider");
            return Err(DomainError::could_not_determine(id.to_string()));
        };

        match provider.retrieve_by_id(id).await {
            Lookup::Found(causer) => Ok(causer),
            Lookup::Missing => {
                debug!(%id, "No user found for identifier");
                Err(DomainError::could_not_determine(id.to_string()))
            }
            Lookup::Unsupported => {
                debug!(%id, "User provider does not support lookup by identifier");
                Err(DomainError::could_not_determine(id.to_string()))
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use causer_resolver_sdk::{
        Authenticatable, CauserResolverError, UserProvider, same_causer,
    };
    use tracing_test::traced_test;

    use super::*;

    #[derive(Debug)]
    struct User(i64);

    impl Authenticatable for User {
        fn auth_identifier(&self) -> CauserId {
            CauserId::Int(self.0)
        }
    }

    fn user(id: i64) -> Causer {
        Arc::new(User(id))
    }

    struct MockProvider {
        users: Option<HashMap<CauserId, Causer>>,
    }

    #[async_trait]
    impl UserProvider for MockProvider {
        async fn retrieve_by_id(&self, id: &CauserId) -> Lookup {
            match &self.users {
                None => Lookup::Unsupported,
                Some(users) => users.get(id).cloned().map_or(Lookup::Missing, Lookup::Found),
            }
        }
    }

    struct MockGuard {
        current: Option<Causer>,
        provider: Option<Arc<dyn UserProvider>>,
    }

    #[async_trait]
    impl Guard for MockGuard {
        async fn user(&self) -> Option<Causer> {
            self.current.clone()
        }

        fn provider(&self) -> Option<Arc<dyn UserProvider>> {
            self.provider.clone()
        }
    }

    /// Auth manager with a single guard registered under `web`, which is also
    /// the default guard.
    struct MockAuthManager {
        web: Arc<MockGuard>,
    }

    impl AuthManager for MockAuthManager {
        fn guard(&self, name: Option<&str>) -> Result<Arc<dyn Guard>, CauserResolverError> {
            match name.unwrap_or("web") {
                "web" => Ok(self.web.clone()),
                other => Err(CauserResolverError::guard_not_defined(other)),
            }
        }
    }

    fn service_with(guard: MockGuard, driver: Option<&str>) -> Service {
        let auth = Arc::new(MockAuthManager {
            web: Arc::new(guard),
        });
        let cfg = CauserResolverConfig {
            default_auth_driver: driver.map(str::to_owned),
        };
        Service::new(auth, &cfg)
    }

    fn web_service() -> Service {
        let users = HashMap::from([(CauserId::Int(7), user(7))]);
        service_with(
            MockGuard {
                current: Some(user(42)),
                provider: Some(Arc::new(MockProvider { users: Some(users) })),
            },
            Some("web"),
        )
    }

    #[tokio::test]
    async fn causer_override_wins_over_everything() {
        let svc = web_service();
        let fixed = user(99);
        svc.resolve_using(|_| CallbackOutput::from("not-a-user"))
            .set_causer(Some(fixed.clone()));

        for subject in [None, Some(Subject::from(7_i64)), Some(Subject::from(user(1)))] {
            let resolved = svc.resolve(subject).await.unwrap().unwrap();
            assert!(Arc::ptr_eq(&resolved, &fixed));
        }
    }

    #[tokio::test]
    async fn clearing_causer_override_reverts_to_default_path() {
        let svc = web_service();
        svc.set_causer(Some(user(99))).set_causer(None);

        let resolved = svc.resolve(None).await.unwrap().unwrap();
        assert_eq!(resolved.auth_identifier(), CauserId::Int(42));
    }

    #[tokio::test]
    async fn callback_receives_subject_and_its_causer_is_returned() {
        let svc = web_service();
        svc.resolve_using(|subject| match subject {
            Some(Subject::Id(CauserId::Int(id))) => user(id * 10).into(),
            _ => CallbackOutput::Absent,
        });

        let resolved = svc.resolve(Some(5_i64.into())).await.unwrap().unwrap();
        assert_eq!(resolved.auth_identifier(), CauserId::Int(50));
        assert!(svc.resolve(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn callback_returning_non_causer_fails() {
        let svc = web_service();
        svc.resolve_using(|_| "not-a-user".into());

        let err = svc.resolve(Some(5_i64.into())).await.unwrap_err();
        match err {
            DomainError::CouldNotDetermineCauser { value } => assert_eq!(value, "not-a-user"),
            other => panic!("Expected CouldNotDetermineCauser, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn forgetting_callback_reverts_to_default_path() {
        let svc = web_service();
        svc.resolve_using(|_| CallbackOutput::Absent).forget_resolver();

        let resolved = svc.resolve(None).await.unwrap();
        assert!(resolved.is_some());
    }

    #[tokio::test]
    async fn causer_subject_passes_through() {
        let svc = web_service();
        let subject = user(1234);

        let resolved = svc.resolve(Some(subject.clone().into())).await.unwrap().unwrap();
        assert!(same_causer(&resolved, &subject));
        assert!(Arc::ptr_eq(&resolved, &subject));
    }

    #[tokio::test]
    async fn absent_subject_returns_current_user() {
        let svc = web_service();

        let resolved = svc.resolve(None).await.unwrap().unwrap();
        assert_eq!(resolved.auth_identifier(), CauserId::Int(42));
    }

    #[tokio::test]
    async fn absent_subject_with_guest_returns_none() {
        let svc = service_with(
            MockGuard {
                current: None,
                provider: None,
            },
            Some("web"),
        );

        assert!(svc.resolve(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn identifier_is_looked_up_through_provider() {
        let svc = web_service();

        let resolved = svc.resolve(Some(7_i64.into())).await.unwrap().unwrap();
        assert_eq!(resolved.auth_identifier(), CauserId::Int(7));
    }

    #[tokio::test]
    async fn unknown_identifier_fails() {
        let svc = web_service();

        let err = svc.resolve(Some(8_i64.into())).await.unwrap_err();
        assert!(matches!(err, DomainError::CouldNotDetermineCauser { ref value } if value == "8"));
    }

    #[tokio::test]
    async fn identifier_without_provider_fails() {
        let svc = service_with(
            MockGuard {
                current: Some(user(42)),
                provider: None,
            },
            Some("web"),
        );

        let err = svc.resolve(Some("abc".into())).await.unwrap_err();
        assert!(matches!(err, DomainError::CouldNotDetermineCauser { ref value } if value == "abc"));
    }

    #[tokio::test]
    async fn identifier_with_lookup_unsupported_fails() {
        let svc = service_with(
            MockGuard {
                current: Some(user(42)),
                provider: Some(Arc::new(MockProvider { users: None })),
            },
            Some("web"),
        );

        let err = svc.resolve(Some(7_i64.into())).await.unwrap_err();
        assert!(matches!(err, DomainError::CouldNotDetermineCauser { .. }));
    }

    #[tokio::test]
    async fn unset_driver_uses_default_guard() {
        let svc = service_with(
            MockGuard {
                current: Some(user(42)),
                provider: None,
            },
            None,
        );

        assert_eq!(svc.auth_driver(), None);
        let resolved = svc.resolve(None).await.unwrap().unwrap();
        assert_eq!(resolved.auth_identifier(), CauserId::Int(42));
    }

    #[tokio::test]
    async fn unknown_driver_surfaces_guard_error() {
        let svc = service_with(
            MockGuard {
                current: None,
                provider: None,
            },
            Some("api"),
        );

        let err = svc.resolve(None).await.unwrap_err();
        assert!(matches!(err, DomainError::GuardNotDefined { ref name } if name == "api"));
    }

    #[tokio::test]
    async fn causer_subject_skips_guard_lookup() {
        // An undefined guard is never consulted for pass-through subjects.
        let svc = service_with(
            MockGuard {
                current: None,
                provider: None,
            },
            Some("api"),
        );

        let resolved = svc.resolve(Some(user(3).into())).await.unwrap();
        assert!(resolved.is_some());
    }

    #[tokio::test]
    #[traced_test]
    async fn invalid_callback_output_is_logged() {
        let svc = web_service();
        svc.resolve_using(|_| serde_json::json!({"id": 5}).into());

        assert!(svc.resolve(None).await.is_err());
        assert!(logs_contain("not a causer"));
    }
}
