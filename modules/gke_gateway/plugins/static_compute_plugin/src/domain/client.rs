//! Client implementation for the static compute plugin.
//!
//! Implements `ComputeClient` from the SDK over the in-memory inventory.

use async_trait::async_trait;
use gke_gateway_sdk::{
    BackendService, ComputeClient, ComputeError, ForwardingRulePage, Scope, TargetHttpsProxy,
    UrlMap,
};

use super::service::{Inventory, Service};

fn scope_not_found(scope: &Scope) -> ComputeError {
    ComputeError::NotFound(format!("{scope} does not exist"))
}

fn resource_not_found(scope: &Scope, collection: &str, name: &str) -> ComputeError {
    ComputeError::NotFound(format!("{scope}/{collection}/{name} was not found"))
}

impl Service {
    fn lookup<'a, T>(
        &'a self,
        scope: &Scope,
        collection: &str,
        name: &str,
        pick: impl FnOnce(&'a Inventory, &str) -> Option<&'a T>,
    ) -> Result<&'a T, ComputeError> {
        self.inventory(scope)
            .and_then(|inv| pick(inv, name))
            .ok_or_else(|| resource_not_found(scope, collection, name))
    }
}

#[async_trait]
impl ComputeClient for Service {
    async fn list_forwarding_rules(
        &self,
        scope: &Scope,
        page_token: Option<&str>,
    ) -> Result<ForwardingRulePage, ComputeError> {
        let inventory = self.inventory(scope).ok_or_else(|| scope_not_found(scope))?;
        let rules = &inventory.forwarding_rules;

        let start = match page_token {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .ok()
                .filter(|offset| *offset <= rules.len())
                .ok_or_else(|| ComputeError::Api {
                    status: 400,
                    message: format!("Invalid value for pageToken: {token}"),
                })?,
        };

        let end = start.saturating_add(self.page_size).min(rules.len());
        let next_page_token = (end < rules.len()).then(|| end.to_string());

        Ok(ForwardingRulePage {
            items: rules[start..end].to_vec(),
            next_page_token,
        })
    }

    async fn get_target_https_proxy(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<TargetHttpsProxy, ComputeError> {
        self.lookup(scope, "targetHttpsProxies", name, |inv, n| {
            inv.target_https_proxies.get(n)
        })
        .cloned()
    }

    async fn get_url_map(&self, scope: &Scope, name: &str) -> Result<UrlMap, ComputeError> {
        self.lookup(scope, "urlMaps", name, |inv, n| inv.url_maps.get(n))
            .cloned()
    }

    async fn get_backend_service(
        &self,
        scope: &Scope,
        name: &str,
    ) -> Result<BackendService, ComputeError> {
        self.lookup(scope, "backendServices", name, |inv, n| {
            inv.backend_services.get(n)
        })
        .cloned()
    }
}
