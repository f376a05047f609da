//! Domain layer for the backend service resolver.

pub mod correlation;
pub mod error;
pub mod local_client;
pub mod selection;
pub mod service;
pub mod url_map;

pub use error::DomainError;
pub use local_client::BackendServiceResolverLocalClient;
pub use service::Service;
