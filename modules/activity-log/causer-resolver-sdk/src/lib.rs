//! Causer Resolver SDK
//!
//! This crate provides the public API for the `causer_resolver` module:
//!
//! - [`CauserResolverClient`] - Public API trait for consumers (the activity log pipeline)
//! - [`AuthManager`], [`Guard`], [`UserProvider`] - Auth collaborator traits supplied by the host
//! - [`Causer`], [`Subject`], [`CallbackOutput`] - Resolution models
//! - [`CauserResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use causer_resolver_sdk::CauserResolverClient;
//!
//! // Resolve the currently authenticated user
//! let causer = resolver.resolve(None).await?;
//!
//! // Resolve a user by identifier
//! let causer = resolver.resolve(Some(42.into())).await?;
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::CauserResolverClient;
pub use auth::{AuthManager, Guard, UserProvider};
pub use error::CauserResolverError;
pub use models::{
    Authenticatable, CallbackOutput, Causer, CauserId, Lookup, ResolverCallback, Subject,
    same_causer,
};
