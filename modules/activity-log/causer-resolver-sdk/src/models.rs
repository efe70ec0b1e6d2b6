//! Domain models for the causer resolver module.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Primitive identifier of an authenticatable principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CauserId {
    Int(i64),
    Str(String),
}

impl fmt::Display for CauserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for CauserId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for CauserId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_owned())
    }
}

impl From<String> for CauserId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// A principal that can be attributed as the causer of a logged action.
///
/// Implemented by the host's user models. The resolver never builds one
/// itself; it only passes through what the auth collaborator hands out.
pub trait Authenticatable: fmt::Debug + Send + Sync {
    /// Unique identifier of the principal.
    fn auth_identifier(&self) -> CauserId;

    /// Name of the identifier attribute.
    fn auth_identifier_name(&self) -> &str {
        "id"
    }
}

/// Shared handle to an authenticated principal.
pub type Causer = Arc<dyn Authenticatable>;

/// Returns `true` when both handles refer to the same principal, either the
/// same allocation or the same identifier under the same identifier name.
#[must_use]
pub fn same_causer(a: &Causer, b: &Causer) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
        || (a.auth_identifier_name() == b.auth_identifier_name()
            && a.auth_identifier() == b.auth_identifier())
}

/// Input to resolution. Absence is expressed as `Option<Subject>`.
#[derive(Debug, Clone)]
pub enum Subject {
    /// An already resolved principal; passed through unchanged.
    Causer(Causer),
    /// An identifier to look up through the guard's provider.
    Id(CauserId),
}

impl From<Causer> for Subject {
    fn from(causer: Causer) -> Self {
        Self::Causer(causer)
    }
}

impl From<CauserId> for Subject {
    fn from(id: CauserId) -> Self {
        Self::Id(id)
    }
}

impl From<i64> for Subject {
    fn from(id: i64) -> Self {
        Self::Id(id.into())
    }
}

impl From<&str> for Subject {
    fn from(id: &str) -> Self {
        Self::Id(id.into())
    }
}

impl From<String> for Subject {
    fn from(id: String) -> Self {
        Self::Id(id.into())
    }
}

/// Value produced by a resolver callback.
///
/// Only [`CallbackOutput::Causer`] and [`CallbackOutput::Absent`] are
/// resolvable. Anything else is kept verbatim for the error report.
#[derive(Debug, Clone)]
pub enum CallbackOutput {
    Causer(Causer),
    Absent,
    Other(serde_json::Value),
}

impl CallbackOutput {
    /// A value is resolvable iff it is a causer or nothing.
    #[must_use]
    pub fn is_resolvable(&self) -> bool {
        matches!(self, Self::Causer(_) | Self::Absent)
    }

    /// Human readable rendering used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Causer(causer) => causer.auth_identifier().to_string(),
            Self::Absent => "null".to_owned(),
            Self::Other(serde_json::Value::String(s)) => s.clone(),
            Self::Other(other) => other.to_string(),
        }
    }

    /// Convert into the resolution result, handing back `self` if it is not
    /// resolvable.
    ///
    /// # Errors
    ///
    /// Returns the original output when it is neither a causer nor absent.
    pub fn into_causer(self) -> Result<Option<Causer>, Self> {
        match self {
            Self::Causer(causer) => Ok(Some(causer)),
            Self::Absent => Ok(None),
            other @ Self::Other(_) => Err(other),
        }
    }
}

impl From<Causer> for CallbackOutput {
    fn from(causer: Causer) -> Self {
        Self::Causer(causer)
    }
}

impl From<Option<Causer>> for CallbackOutput {
    fn from(causer: Option<Causer>) -> Self {
        causer.map_or(Self::Absent, Self::Causer)
    }
}

impl From<serde_json::Value> for CallbackOutput {
    fn from(value: serde_json::Value) -> Self {
        if value.is_null() {
            Self::Absent
        } else {
            Self::Other(value)
        }
    }
}

impl From<&str> for CallbackOutput {
    fn from(value: &str) -> Self {
        Self::Other(serde_json::Value::from(value))
    }
}

impl From<String> for CallbackOutput {
    fn from(value: String) -> Self {
        Self::Other(serde_json::Value::from(value))
    }
}

impl From<i64> for CallbackOutput {
    fn from(value: i64) -> Self {
        Self::Other(serde_json::Value::from(value))
    }
}

// Identifiers are not causers; a callback must resolve them itself.
impl From<CauserId> for CallbackOutput {
    fn from(id: CauserId) -> Self {
        match id {
            CauserId::Int(id) => id.into(),
            CauserId::Str(id) => id.into(),
        }
    }
}

/// Resolver callback override.
pub type ResolverCallback = Arc<dyn Fn(Option<&Subject>) -> CallbackOutput + Send + Sync>;

/// Outcome of [`UserProvider::retrieve_by_id`](crate::UserProvider::retrieve_by_id).
#[derive(Debug, Clone)]
pub enum Lookup {
    Found(Causer),
    Missing,
    /// The provider cannot look principals up by identifier.
    Unsupported,
}
