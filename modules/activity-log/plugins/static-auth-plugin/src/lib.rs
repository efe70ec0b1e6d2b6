#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Auth Plugin
//!
//! Configuration-backed `AuthManager` for development and testing of the
//! causer resolver. Guards, providers and users are declared up front; the
//! current user of a guard can be switched at runtime with
//! [`Service::act_as`].
//!
//! ## Configuration
//!
//! ```yaml
//! default_guard: web
//! guards:
//!   - name: web
//!     provider: users
//!     current_user: 42
//!   - name: api
//! providers:
//!   - name: users
//!     users:
//!       - id: 42
//!         name: Ada
//!         email: ada@example.com
//! ```

pub mod config;
pub mod domain;

pub use config::StaticAuthPluginConfig;
pub use domain::{Service, StaticUser};
