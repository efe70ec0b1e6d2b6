//! Domain layer for the static auth plugin.

pub mod client;
pub mod service;
pub mod user;

pub use service::Service;
pub use user::StaticUser;
