#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common fixtures for gke-gateway integration tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gke_gateway::Service;
use gke_gateway_sdk::{
    BackendService, ComputeClient, ComputeError, ForwardingRule, ForwardingRulePage,
    PathMatcher, RouteAction, Scope, TargetHttpsProxy, UrlMap, WeightedBackendService,
};
use static_compute_plugin::StaticComputeClient;
use static_compute_plugin::config::{ScopeConfig, StaticComputePluginConfig};

pub const PROJECT: &str = "my-gcp-project";
pub const REGION: &str = "us-central1";
pub const NAMESPACE: &str = "my-cool-app";
pub const GATEWAY: &str = "my-gateway-name";

pub fn global_scope() -> Scope {
    Scope::Global {
        project: PROJECT.to_owned(),
    }
}

pub fn regional_scope() -> Scope {
    Scope::Regional {
        project: PROJECT.to_owned(),
        region: REGION.to_owned(),
    }
}

/// Resource path prefix as Compute Engine renders it for `scope`.
pub fn prefix(scope: &Scope) -> String {
    format!("https://www.googleapis.com/compute/v1/{scope}")
}

pub fn description_for(namespace: &str, gateway: &str) -> String {
    serde_json::json!({
        "k8sResource": format!("/namespaces/{namespace}/gateways/{gateway}"),
        "k8sResourceVersion": "v1beta1",
    })
    .to_string()
}

pub fn forwarding_rule(
    scope: &Scope,
    name: &str,
    description: &str,
    target: &str,
) -> ForwardingRule {
    ForwardingRule {
        id: 1,
        name: name.to_owned(),
        description: description.to_owned(),
        target: format!("{}/{target}", prefix(scope)),
    }
}

pub fn gateway_rule(scope: &Scope, name: &str) -> ForwardingRule {
    forwarding_rule(
        scope,
        name,
        &description_for(NAMESPACE, GATEWAY),
        "targetHttpsProxies/proxy-1",
    )
}

pub fn proxy(scope: &Scope, name: &str, url_map: &str) -> TargetHttpsProxy {
    TargetHttpsProxy {
        id: 2,
        name: name.to_owned(),
        url_map: format!("{}/urlMaps/{url_map}", prefix(scope)),
    }
}

pub fn backend_path(scope: &Scope, name: &str) -> String {
    format!("{}/backendServices/{name}", prefix(scope))
}

pub fn url_map_with_default(scope: &Scope, name: &str, service: &str) -> UrlMap {
    UrlMap {
        name: name.to_owned(),
        default_service: Some(backend_path(scope, service)),
        ..UrlMap::default()
    }
}

pub fn weighted(scope: &Scope, services: &[&str]) -> RouteAction {
    RouteAction {
        fault_injection_policy: None,
        weighted_backend_services: services
            .iter()
            .map(|s| WeightedBackendService {
                backend_service: backend_path(scope, s),
                weight: 100,
            })
            .collect(),
    }
}

pub fn path_matcher(name: &str, default_service: Option<String>) -> PathMatcher {
    PathMatcher {
        name: name.to_owned(),
        default_service,
        ..PathMatcher::default()
    }
}

pub fn backend_service(id: u64, name: &str) -> BackendService {
    BackendService {
        id,
        name: name.to_owned(),
    }
}

/// Inventory for the canonical chain `fr-1 → proxy-1 → map-1 → svc-1` in `scope`.
pub fn happy_chain(scope: &Scope) -> ScopeConfig {
    ScopeConfig {
        project: scope.project().to_owned(),
        region: scope.region().map(str::to_owned),
        forwarding_rules: vec![gateway_rule(scope, "fr-1")],
        target_https_proxies: vec![proxy(scope, "proxy-1", "map-1")],
        url_maps: vec![url_map_with_default(scope, "map-1", "svc-1")],
        backend_services: vec![backend_service(1_234_567_890_123, "svc-1")],
    }
}

pub fn static_client(scopes: Vec<ScopeConfig>) -> Arc<StaticComputeClient> {
    Arc::new(StaticComputeClient::from_config(&StaticComputePluginConfig {
        page_size: 1,
        scopes,
    }))
}

/// Compute call as observed by [`RecordingClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListForwardingRules(Scope),
    GetTargetHttpsProxy(Scope, String),
    GetUrlMap(Scope, String),
    GetBackendService(Scope, String),
}

impl Call {
    pub fn scope(&self) -> &Scope {
        match self {
            Self::ListForwardingRules(s)
            | Self::GetTargetHttpsProxy(s, _)
            | Self::GetUrlMap(s, _)
            | Self::GetBackendService(s, _) => s,
        }
    }
}

/// Stage whose call [`RecordingClient`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    ListForwardingRules,
    GetTargetHttpsProxy,
    GetUrlMap,
    GetBackendService,
}

/// Wraps a compute client, records every call and optionally fails one stage.
pub struct RecordingClient {
    inner: Arc<dyn ComputeClient>,
    calls: Mutex<Vec<Call>>,
    fail_at: Option<(FailAt, ComputeError)>,
}

impl RecordingClient {
    pub fn new(inner: Arc<dyn ComputeClient>) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
            fail_at: None,
        }
    }

    pub fn failing(inner: Arc<dyn ComputeClient>, stage: FailAt, error: ComputeError) -> Self {
        Self {
            fail_at: Some((stage, error)),
            ..Self::new(inner)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, stage: FailAt) -> Result<(), ComputeError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_at {
            Some((at, error)) if *at == stage => Err(error.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ComputeClient for RecordingClient {
    async fn list_forwarding_rules(
        &self,
        scope: &Scope,
        page_token: Option<&str>,
    ) -> Result<ForwardingRulePage, ComputeError> {
        self.record(
            Call::ListForwardingRules(scope.clone()),
            FailAt::ListForwardingRules,
        )?;
        self.inner.list_forwarding_rules(scope, page_token).await
    }

    async fn get_target_https_proxy(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<TargetHttpsProxy, ComputeError> {
        self.record(
            Call::GetTargetHttpsProxy(scope.clone(), name.to_owned()),
            FailAt::GetTargetHttpsProxy,
        )?;
        self.inner.get_target_https_proxy(scope, name).await
    }

    async fn get_url_map(&self, scope: &Scope, name: &str) -> Result<UrlMap, ComputeError> {
        self.record(
            Call::GetUrlMap(scope.clone(), name.to_owned()),
            FailAt::GetUrlMap,
        )?;
        self.inner.get_url_map(scope, name).await
    }

    async fn get_backend_service(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<BackendService, ComputeError> {
        self.record(
            Call::GetBackendService(scope.clone(), name.to_owned()),
            FailAt::GetBackendService,
        )?;
        self.inner.get_backend_service(scope, name).await
    }
}

/// Service over a recording client, returned together so calls can be inspected.
pub fn recorded_service(client: RecordingClient) -> (Service, Arc<RecordingClient>) {
    let client = Arc::new(client);
    (Service::new(client.clone()), client)
}
