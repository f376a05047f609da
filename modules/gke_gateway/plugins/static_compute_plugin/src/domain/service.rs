//! Domain service for the static compute plugin.

use std::collections::HashMap;

use gke_gateway_sdk::{BackendService, ForwardingRule, Scope, TargetHttpsProxy, UrlMap};

use crate::config::{ScopeConfig, StaticComputePluginConfig};

/// Resources of one scope, indexed by name.
#[derive(Debug, Default)]
pub(super) struct Inventory {
    pub(super) forwarding_rules: Vec<ForwardingRule>,
    pub(super) target_https_proxies: HashMap<String, TargetHttpsProxy>,
    pub(super) url_maps: HashMap<String, UrlMap>,
    pub(super) backend_services: HashMap<String, BackendService>,
}

impl Inventory {
    fn extend(&mut self, cfg: &ScopeConfig) {
        self.forwarding_rules
            .extend(cfg.forwarding_rules.iter().cloned());
        self.target_https_proxies.extend(
            cfg.target_https_proxies
                .iter()
                .map(|p| (p.name.clone(), p.clone())),
        );
        self.url_maps
            .extend(cfg.url_maps.iter().map(|m| (m.name.clone(), m.clone())));
        self.backend_services.extend(
            cfg.backend_services
                .iter()
                .map(|b| (b.name.clone(), b.clone())),
        );
    }
}

/// Static compute service.
///
/// Holds load balancing resources in memory, loaded from configuration.
/// Forwarding rules keep their configured order so listings are stable.
#[derive(Debug)]
pub struct Service {
    pub(super) scopes: HashMap<Scope, Inventory>,

    /// Forwarding rules per page. Always at least one.
    pub(super) page_size: usize,
}

impl Service {
    /// Creates a new service from configuration.
    ///
    /// Several entries for the same scope are merged. A later resource with
    /// an already known name replaces the earlier one.
    #[must_use]
    pub fn from_config(cfg: &StaticComputePluginConfig) -> Self {
        let mut scopes: HashMap<Scope, Inventory> = HashMap::new();
        for entry in &cfg.scopes {
            scopes.entry(entry.scope()).or_default().extend(entry);
        }

        let page_size = if cfg.page_size == 0 {
            usize::MAX
        } else {
            cfg.page_size
        };

        tracing::debug!(
            scopes = scopes.len(),
            page_size = cfg.page_size,
            "static compute inventory loaded"
        );

        Self { scopes, page_size }
    }

    pub(super) fn inventory(&self, scope: &Scope) -> Option<&Inventory> {
        self.scopes.get(scope)
    }
}
