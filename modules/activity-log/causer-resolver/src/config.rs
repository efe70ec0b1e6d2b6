//! Configuration for the causer resolver.
//!
//! ```yaml
//! activitylog:
//!   default_auth_driver: web
//! ```
//!
//! Environment variables override the file, e.g.
//! `APP__ACTIVITYLOG__DEFAULT_AUTH_DRIVER=api`.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};

/// Top-level key the resolver reads its settings from.
pub const CONFIG_SECTION: &str = "activitylog";

/// Prefix for environment overrides; nested keys are split on `__`.
pub const ENV_PREFIX: &str = "APP__";

/// Configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CauserResolverConfig {
    /// Guard consulted for the current user and for identifier lookups.
    ///
    /// `None` selects the auth manager's default guard.
    pub default_auth_driver: Option<String>,
}

impl CauserResolverConfig {
    /// Extract the `activitylog` section from an already assembled figment.
    ///
    /// # Errors
    ///
    /// Fails if the section contains unknown fields or values of the wrong type.
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        figment
            .focus(CONFIG_SECTION)
            .extract()
            .with_context(|| format!("invalid `{CONFIG_SECTION}` configuration"))
    }

    /// Load from an optional YAML file, then apply `APP__` environment overrides.
    ///
    /// # Errors
    ///
    /// Fails if `path` does not point to a file or the merged configuration is invalid.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(path.is_file(), "config file not found: {}", path.display());
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let cfg = Self::from_figment(&figment)?;
        tracing::debug!(
            auth_driver = cfg.default_auth_driver.as_deref().unwrap_or("<default>"),
            "Loaded causer_resolver configuration"
        );
        Ok(cfg)
    }
}
