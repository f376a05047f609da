//! Local (in-process) client for the backend service resolver.

use std::sync::Arc;

use async_trait::async_trait;
use gke_gateway_sdk::{
    BackendServiceResolverClient, BackendServiceResolverError, ResolutionRequest,
    ResolvedBackendService,
};

use super::{DomainError, Service};

/// Local client wrapping the resolver service.
pub struct BackendServiceResolverLocalClient {
    svc: Arc<Service>,
}

impl BackendServiceResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> BackendServiceResolverError {
    tracing::error!(operation = op, error = %e, "gke-gateway call failed");
    e.into()
}

#[async_trait]
impl BackendServiceResolverClient for BackendServiceResolverLocalClient {
    async fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Option<ResolvedBackendService>, BackendServiceResolverError> {
        self.svc
            .resolve(request)
            .await
            .map_err(|e| log_and_convert("resolve", e))
    }
}
