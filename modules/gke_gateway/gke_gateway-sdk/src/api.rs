//! Public API trait for the backend service resolver.

use async_trait::async_trait;

use crate::error::BackendServiceResolverError;
use crate::models::{ResolutionRequest, ResolvedBackendService};

/// Public API trait for the backend service resolver.
///
/// ```ignore
/// let request = ResolutionRequest::new("my-gateway-name", "my-cool-app", "my-gcp-project");
///
/// match resolver.resolve(&request).await? {
///     Some(svc) => println!("{} ({})", svc.name, svc.id),
///     None => println!("gateway not provisioned yet"),
/// }
/// ```
///
/// Implementations are read-only and hold no per-call state, so a single
/// instance can serve concurrent lookups for different gateways.
#[async_trait]
pub trait BackendServiceResolverClient: Send + Sync {
    /// Find the backend service serving traffic for a gateway.
    ///
    /// Returns `Ok(None)` when no forwarding rule carries the gateway's
    /// correlation key, when the project scope has no forwarding rules at all,
    /// or when the URL map references no eligible backend service.
    ///
    /// # Errors
    ///
    /// - `Ambiguous` if more than one forwarding rule or backend service matched
    /// - `Unsupported` if the forwarding rule targets a non-HTTPS proxy
    /// - `LookupFailed` if any compute API call failed
    async fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Option<ResolvedBackendService>, BackendServiceResolverError>;
}
