//! Domain layer for the static compute plugin.

pub mod client;
pub mod service;

pub use service::Service;
