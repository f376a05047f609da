//! Compute Engine REST plugin
//!
//! Implements `ComputeClient` against the Compute Engine v1 JSON API:
//!
//! ```text
//! {endpoint}/projects/{project}/global/{collection}/{name}
//! {endpoint}/projects/{project}/regions/{region}/{collection}/{name}
//! ```
//!
//! The access token is taken as-is from configuration and sent as a bearer
//! token. Obtaining or refreshing it is left to the caller.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod client;
pub mod config;
pub mod error;

pub use client::GceComputeClient;
pub use config::GceComputePluginConfig;
pub use error::BuildError;
