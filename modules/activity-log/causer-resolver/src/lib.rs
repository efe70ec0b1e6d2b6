//! Causer Resolver Module
//!
//! Determines which principal caused an activity log entry. Resolution
//! consults, in order, a fixed causer override, a resolver callback, and
//! finally the host's auth manager through the configured guard.
//!
//! Provides the `CauserResolverClient` implementation consumed by the
//! activity log pipeline.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::CauserResolverConfig;
pub use domain::{CauserResolverLocalClient, DomainError, Service};
