use causer_resolver_sdk::{Authenticatable, CauserId};

use crate::config::UserConfig;

/// User record handed out as a causer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticUser {
    pub id: CauserId,
    pub name: String,
    pub email: Option<String>,
}

impl From<&UserConfig> for StaticUser {
    fn from(cfg: &UserConfig) -> Self {
        Self {
            id: cfg.id.clone(),
            name: cfg.name.clone(),
            email: cfg.email.clone(),
        }
    }
}

impl Authenticatable for StaticUser {
    fn auth_identifier(&self) -> CauserId {
        self.id.clone()
    }
}
