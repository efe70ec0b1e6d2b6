//! Domain layer for the causer resolver.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::CauserResolverLocalClient;
pub use service::Service;
