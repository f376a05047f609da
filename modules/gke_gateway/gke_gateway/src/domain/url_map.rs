//! Backend service candidate extraction from a URL map.

use gke_gateway_sdk::{RouteAction, UrlMap};

/// Every backend service path the URL map can route real traffic to.
///
/// Encounter order: the map's default service, each path matcher's default
/// service, then the weighted backend services of every route action (map
/// default action, then per path matcher its default action followed by its
/// route rules). Fault-injected actions are skipped. Duplicates are kept.
#[must_use]
pub fn backend_service_candidates(map: &UrlMap) -> Vec<&str> {
    let mut paths: Vec<&str> = Vec::new();
    let mut actions: Vec<Option<&RouteAction>> = vec![map.default_route_action.as_ref()];

    if let Some(service) = &map.default_service {
        paths.push(service);
    }

    for matcher in &map.path_matchers {
        actions.push(matcher.default_route_action.as_ref());

        if let Some(service) = &matcher.default_service {
            paths.push(service);
        }

        actions.extend(matcher.route_rules.iter().map(|r| r.route_action.as_ref()));
    }

    for action in actions.into_iter().flatten() {
        if action.fault_injection_policy.is_some() {
            continue;
        }
        paths.extend(
            action
                .weighted_backend_services
                .iter()
                .map(|w| w.backend_service.as_str()),
        );
    }

    paths
}
