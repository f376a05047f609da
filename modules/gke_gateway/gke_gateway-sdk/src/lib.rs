//! GKE Gateway SDK
//!
//! This crate provides the public API for the `gke_gateway` module:
//!
//! - [`BackendServiceResolverClient`] - Public API trait for consumers
//! - [`ComputeClient`] - Plugin API trait for compute resource readers
//! - [`ResolutionRequest`], [`Scope`], [`ResolvedBackendService`] - Request/response models
//! - [`ForwardingRule`], [`TargetHttpsProxy`], [`UrlMap`], [`BackendService`] - Compute resources
//! - [`BackendServiceResolverError`], [`ComputeError`] - Error types
//! - [`Resolution`], [`Diagnostic`] - Outcome with user-facing diagnostics
//!
//! ## Usage
//!
//! ```ignore
//! use gke_gateway_sdk::{BackendServiceResolverClient, Resolution, ResolutionRequest};
//!
//! let request = ResolutionRequest::new("my-gateway-name", "my-cool-app", "my-gcp-project")
//!     .with_region("us-central1");
//!
//! let resolution = Resolution::from(resolver.resolve(&request).await);
//! if let Some(svc) = resolution.backend_service {
//!     println!("{} ({})", svc.name, svc.id);
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod compute;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::BackendServiceResolverClient;
pub use compute::{
    BackendService, FaultInjectionPolicy, ForwardingRule, ForwardingRulePage, PathMatcher,
    RouteAction, RouteRule, TargetHttpsProxy, UrlMap, WeightedBackendService, trailing_segment,
};
pub use diagnostics::{Diagnostic, Resolution, Severity};
pub use error::{BackendServiceResolverError, CandidateKind, ComputeError, Operation};
pub use models::{ResolutionRequest, ResolvedBackendService, Scope};
pub use plugin_api::{ComputeClient, forwarding_rules};
