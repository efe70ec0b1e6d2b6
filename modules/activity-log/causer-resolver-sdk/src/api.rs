//! Public API trait for the causer resolver.
//!
//! The activity log pipeline consumes this trait to attribute a logged
//! action to a principal. The resolver implements it on top of the host's
//! [`AuthManager`](crate::AuthManager).

use async_trait::async_trait;

use crate::error::CauserResolverError;
use crate::models::{Causer, ResolverCallback, Subject};

/// Public API trait for the causer resolver.
///
/// ```ignore
/// let resolver: Arc<dyn CauserResolverClient> = /* ... */;
///
/// // Attribute everything to a fixed system user for the duration of a job
/// resolver.set_causer(Some(system_user));
/// let causer = resolver.resolve(None).await?;
/// ```
#[async_trait]
pub trait CauserResolverClient: Send + Sync {
    /// Resolve the causer for a logging event.
    ///
    /// Precedence: a fixed causer override, then a resolver callback, then
    /// the configured guard (current user, or lookup by identifier).
    ///
    /// # Errors
    ///
    /// - `CouldNotDetermineCauser` if the callback returns something other
    ///   than a causer or nothing, or if an identifier cannot be looked up
    /// - `GuardNotDefined` if the configured auth driver is unknown
    /// - `Internal` for unexpected errors
    async fn resolve(&self, subject: Option<Subject>) -> Result<Option<Causer>, CauserResolverError>;

    /// Install or replace the resolver callback override.
    fn resolve_using(&self, callback: ResolverCallback);

    /// Install or replace the fixed causer override. `None` clears it.
    fn set_causer(&self, causer: Option<Causer>);
}
