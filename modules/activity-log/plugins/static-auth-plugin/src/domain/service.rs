//! Service implementation for the static auth plugin.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, bail};
use causer_resolver_sdk::{Causer, CauserId, CauserResolverError};
use parking_lot::RwLock;
use tracing::{info, warn};

use super::user::StaticUser;
use crate::config::{ProviderConfig, StaticAuthPluginConfig};

/// In-memory user provider.
pub struct StaticProvider {
    pub(super) lookup: bool,
    pub(super) users: HashMap<CauserId, Causer>,
}

impl StaticProvider {
    fn from_config(cfg: &ProviderConfig) -> Self {
        let users = cfg
            .users
            .iter()
            .map(|u| {
                let causer: Causer = Arc::new(StaticUser::from(u));
                (u.id.clone(), causer)
            })
            .collect();

        Self {
            lookup: cfg.lookup,
            users,
        }
    }
}

/// Guard whose authenticated user is an identifier into its provider.
pub struct StaticGuard {
    pub(super) provider: Option<Arc<StaticProvider>>,
    pub(super) current: RwLock<Option<CauserId>>,
}

/// Static auth manager.
///
/// Guards are fixed at construction; only the authenticated user of each
/// guard changes afterwards.
pub struct Service {
    pub(super) default_guard: String,
    pub(super) guards: HashMap<String, Arc<StaticGuard>>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Fails on duplicate guard or provider names, on guards referencing an
    /// unknown provider, and when the default guard is not declared.
    pub fn from_config(cfg: &StaticAuthPluginConfig) -> anyhow::Result<Self> {
        warn!(
            "Static auth plugin serves a fixed set of users. \
             Use it for development and tests only."
        );

        let mut providers: HashMap<&str, Arc<StaticProvider>> = HashMap::new();
        for p in &cfg.providers {
            if providers
                .insert(&p.name, Arc::new(StaticProvider::from_config(p)))
                .is_some()
            {
                bail!("duplicate provider '{}'", p.name);
            }
        }

        let mut guards = HashMap::new();
        for g in &cfg.guards {
            let provider = g
                .provider
                .as_deref()
                .map(|name| {
                    providers.get(name).cloned().with_context(|| {
                        format!("guard '{}' references unknown provider '{name}'", g.name)
                    })
                })
                .transpose()?;

            let guard = Arc::new(StaticGuard {
                provider,
                current: RwLock::new(g.current_user.clone()),
            });
            if guards.insert(g.name.clone(), guard).is_some() {
                bail!("duplicate guard '{}'", g.name);
            }
        }

        if !guards.contains_key(&cfg.default_guard) {
            bail!("default guard '{}' is not declared", cfg.default_guard);
        }

        info!(
            default_guard = %cfg.default_guard,
            guard_count = guards.len(),
            provider_count = providers.len(),
            "Loaded static auth configuration"
        );

        Ok(Self {
            default_guard: cfg.default_guard.clone(),
            guards,
        })
    }

    pub(super) fn find_guard(&self, name: Option<&str>) -> Option<&Arc<StaticGuard>> {
        self.guards.get(name.unwrap_or(&self.default_guard))
    }

    /// Switch the authenticated user of a guard. `None` logs the guard out.
    ///
    /// # Errors
    ///
    /// - `GuardNotDefined` if no guard exists under `guard`
    pub fn act_as(&self, guard: Option<&str>, user: Option<CauserId>) -> Result<(), CauserResolverError> {
        let target = self.find_guard(guard).ok_or_else(|| {
            CauserResolverError::guard_not_defined(guard.unwrap_or(&self.default_guard))
        })?;
        *target.current.write() = user;
        Ok(())
    }
}
