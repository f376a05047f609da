//! GKE Gateway Module
//!
//! Walks the load balancing resources GKE creates for a Kubernetes Gateway
//! (forwarding rule, target HTTPS proxy, URL map, backend service) and returns
//! the single backend service serving the gateway's traffic.
//!
//! The module provides the `BackendServiceResolverClient` implementation
//! ([`domain::BackendServiceResolverLocalClient`]) on top of any
//! `ComputeClient` plugin.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::GkeGatewayConfig;
pub use domain::{BackendServiceResolverLocalClient, DomainError, Service};
