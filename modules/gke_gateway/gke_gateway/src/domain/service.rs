//! Chain resolver: forwarding rule → target HTTPS proxy → URL map → backend service.
//!
//! Stages run strictly in sequence and every lookup of one resolution uses the
//! same [`Scope`]. A stage that finds nothing ends the resolution with
//! `Ok(None)`; a stage that fails ends it with that error.

use std::sync::Arc;

use futures::StreamExt;
use gke_gateway_sdk::{
    CandidateKind, ComputeClient, ComputeError, ForwardingRule, Operation, ResolutionRequest,
    ResolvedBackendService, Scope, TargetHttpsProxy, UrlMap, forwarding_rules, trailing_segment,
};
use tracing::{debug, warn};

use super::correlation::matches_gateway;
use super::error::DomainError;
use super::selection::exactly_one;
use super::url_map::backend_service_candidates;

/// The only proxy kind whose URL map can be walked.
pub const TARGET_HTTPS_PROXIES: &str = "targetHttpsProxies";

/// Backend service resolver.
///
/// Holds nothing but the shared compute client; one instance serves any
/// number of concurrent resolutions.
pub struct Service {
    compute: Arc<dyn ComputeClient>,
}

impl Service {
    #[must_use]
    pub fn new(compute: Arc<dyn ComputeClient>) -> Self {
        Self { compute }
    }

    /// Resolve the backend service serving `request`'s gateway.
    ///
    /// # Errors
    ///
    /// - `Ambiguous` if several forwarding rules or backend services qualify
    /// - `UnsupportedTarget` if the forwarding rule does not target an HTTPS proxy
    /// - `Lookup` if a compute API call fails
    #[tracing::instrument(skip_all, fields(
        gateway = %request.gateway,
        namespace = %request.namespace,
        project = %request.project,
        region = request.region.as_deref().unwrap_or("global"),
    ))]
    pub async fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Option<ResolvedBackendService>, DomainError> {
        let scope = request.scope();

        let Some(rule) = self.locate_forwarding_rule(&scope, request).await? else {
            debug!("no forwarding rule correlates with the gateway");
            return Ok(None);
        };
        debug!(forwarding_rule = %rule.name, "located forwarding rule");

        let proxy = self.resolve_proxy(&scope, &rule).await?;
        debug!(proxy = %proxy.name, url_map = %proxy.url_map, "resolved target proxy");

        let url_map = self.resolve_url_map(&scope, &proxy).await?;

        let Some(path) = exactly_one(
            backend_service_candidates(&url_map),
            CandidateKind::BackendService,
            |p| trailing_segment(p).to_owned(),
        )?
        else {
            debug!(url_map = %url_map.name, "URL map references no backend service");
            return Ok(None);
        };

        let resolved = self.resolve_backend_service(&scope, path).await?;
        debug!(backend_service = %resolved.name, id = %resolved.id, "resolved backend service");

        Ok(Some(resolved))
    }

    /// Walk every forwarding rule in scope and keep the correlated one.
    async fn locate_forwarding_rule(
        &self,
        scope: &Scope,
        request: &ResolutionRequest,
    ) -> Result<Option<ForwardingRule>, DomainError> {
        let mut rules = forwarding_rules(self.compute.as_ref(), scope);
        let mut matching = Vec::new();

        while let Some(item) = rules.next().await {
            match item {
                Ok(rule) => {
                    if matches_gateway(&rule.description, &request.namespace, &request.gateway) {
                        matching.push(rule);
                    }
                }
                Err(e) if e.is_not_found() => {
                    warn!(%scope, "scope has no forwarding rules");
                    return Ok(None);
                }
                Err(e) => return Err(DomainError::lookup(Operation::ListForwardingRules, e)),
            }
        }

        exactly_one(matching, CandidateKind::ForwardingRule, |r| r.name.clone())
    }

    async fn resolve_proxy(
        &self,
        scope: &Scope,
        rule: &ForwardingRule,
    ) -> Result<TargetHttpsProxy, DomainError> {
        let name = https_proxy_name(rule)?;
        if name.is_empty() {
            return Err(unnamed(Operation::GetTargetHttpsProxy, &rule.target));
        }

        self.compute
            .get_target_https_proxy(scope, name)
            .await
            .map_err(|e| DomainError::lookup(Operation::GetTargetHttpsProxy(name.to_owned()), e))
    }

    async fn resolve_url_map(
        &self,
        scope: &Scope,
        proxy: &TargetHttpsProxy,
    ) -> Result<UrlMap, DomainError> {
        let name = trailing_segment(&proxy.url_map);
        if name.is_empty() {
            return Err(unnamed(Operation::GetUrlMap, &proxy.url_map));
        }

        self.compute
            .get_url_map(scope, name)
            .await
            .map_err(|e| DomainError::lookup(Operation::GetUrlMap(name.to_owned()), e))
    }

    async fn resolve_backend_service(
        &self,
        scope: &Scope,
        path: &str,
    ) -> Result<ResolvedBackendService, DomainError> {
        let name = trailing_segment(path);
        if name.is_empty() {
            return Err(unnamed(Operation::GetBackendService, path));
        }

        let service = self
            .compute
            .get_backend_service(scope, name)
            .await
            .map_err(|e| DomainError::lookup(Operation::GetBackendService(name.to_owned()), e))?;

        Ok(ResolvedBackendService {
            id: service.id.to_string(),
            name: service.name,
        })
    }
}

/// Proxy name from a forwarding rule target of the form `.../targetHttpsProxies/{name}`.
fn https_proxy_name(rule: &ForwardingRule) -> Result<&str, DomainError> {
    let mut segments = rule.target.rsplit('/');
    let name = segments.next();

    match (segments.next(), name) {
        (Some(TARGET_HTTPS_PROXIES), Some(name)) => Ok(name),
        (kind, _) => Err(DomainError::UnsupportedTarget {
            rule: rule.name.clone(),
            target_kind: kind.unwrap_or(&rule.target).to_owned(),
        }),
    }
}

/// A reference whose last path segment is empty names nothing to fetch.
fn unnamed(operation: fn(String) -> Operation, reference: &str) -> DomainError {
    DomainError::lookup(
        operation(String::new()),
        ComputeError::NotFound(format!("{reference} does not name a resource")),
    )
}
