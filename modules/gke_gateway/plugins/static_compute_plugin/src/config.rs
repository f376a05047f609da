//! Configuration for the static compute plugin.

use gke_gateway_sdk::{BackendService, ForwardingRule, Scope, TargetHttpsProxy, UrlMap};
use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticComputePluginConfig {
    /// Forwarding rules per listing page. `0` serves everything in one page.
    pub page_size: usize,

    /// Resource inventory per project/region.
    pub scopes: Vec<ScopeConfig>,
}

/// Resources of one project, either global or in one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    pub project: String,

    /// Region. `None` for global resources.
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub forwarding_rules: Vec<ForwardingRule>,

    #[serde(default)]
    pub target_https_proxies: Vec<TargetHttpsProxy>,

    #[serde(default)]
    pub url_maps: Vec<UrlMap>,

    #[serde(default)]
    pub backend_services: Vec<BackendService>,
}

impl ScopeConfig {
    #[must_use]
    pub fn scope(&self) -> Scope {
        match &self.region {
            Some(region) => Scope::Regional {
                project: self.project.clone(),
                region: region.clone(),
            },
            None => Scope::Global {
                project: self.project.clone(),
            },
        }
    }
}
