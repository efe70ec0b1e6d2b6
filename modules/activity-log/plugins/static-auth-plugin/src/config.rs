//! Configuration for the static auth plugin.

use causer_resolver_sdk::CauserId;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthPluginConfig {
    /// Guard used when the resolver asks for the default guard.
    pub default_guard: String,

    /// Declared guards.
    pub guards: Vec<GuardConfig>,

    /// Declared user providers.
    pub providers: Vec<ProviderConfig>,
}

impl Default for StaticAuthPluginConfig {
    fn default() -> Self {
        Self {
            default_guard: "web".to_owned(),
            guards: vec![GuardConfig {
                name: "web".to_owned(),
                provider: Some("users".to_owned()),
                current_user: None,
            }],
            providers: vec![ProviderConfig {
                name: "users".to_owned(),
                lookup: true,
                users: Vec::new(),
            }],
        }
    }
}

/// A guard and the provider backing it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub name: String,

    /// Provider name. Guards without one cannot look users up by id.
    #[serde(default)]
    pub provider: Option<String>,

    /// Identifier of the user authenticated on this guard at startup.
    #[serde(default)]
    pub current_user: Option<CauserId>,
}

/// A provider and the users it knows.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    pub name: String,

    /// Whether the provider answers lookups by identifier.
    #[serde(default = "default_lookup")]
    pub lookup: bool,

    #[serde(default)]
    pub users: Vec<UserConfig>,
}

fn default_lookup() -> bool {
    true
}

/// A user record.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub id: CauserId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}
