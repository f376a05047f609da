//! Compute Engine resources read by the resolver.
//!
//! Field names follow the Compute Engine v1 JSON representation so the same
//! types decode REST responses and static fixtures. Unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Forwarding rule (entry point of a load balancer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForwardingRule {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: String,
    /// Free-form description. GKE stores a JSON payload here.
    pub description: String,
    /// Full or partial path of the target proxy.
    pub target: String,
}

/// One page of a forwarding rule listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForwardingRulePage {
    pub items: Vec<ForwardingRule>,
    /// Token for the next page. `None` (or empty) ends the listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetHttpsProxy {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: String,
    /// Path of the URL map this proxy routes through.
    pub url_map: String,
}

/// URL map with its default and per-path routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlMap {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_route_action: Option<RouteAction>,
    pub path_matchers: Vec<PathMatcher>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathMatcher {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_route_action: Option<RouteAction>,
    pub route_rules: Vec<RouteRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteRule {
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_action: Option<RouteAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteAction {
    /// Presence alone matters: a fault-injected route never reaches a real backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_injection_policy: Option<FaultInjectionPolicy>,
    pub weighted_backend_services: Vec<WeightedBackendService>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultInjectionPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeightedBackendService {
    pub backend_service: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackendService {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: String,
}

/// Compute Engine encodes `uint64` fields as JSON strings.
fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Last `/`-separated segment of a resource path.
#[must_use]
pub fn trailing_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backend_service_id_accepts_string_and_number() {
        let from_string: BackendService =
            serde_json::from_value(json!({"id": "18446744073709551615", "name": "svc"})).unwrap();
        assert_eq!(from_string.id, u64::MAX);

        let from_number: BackendService =
            serde_json::from_value(json!({"id": 42, "name": "svc"})).unwrap();
        assert_eq!(from_number.id, 42);
    }

    #[test]
    fn url_map_decodes_api_shape_and_ignores_unknown_fields() {
        let map: UrlMap = serde_json::from_value(json!({
            "kind": "compute#urlMap",
            "name": "gkegw1-map",
            "defaultService": "projects/p/global/backendServices/svc-1",
            "hostRules": [{"hosts": ["*"], "pathMatcher": "m"}],
            "pathMatchers": [{
                "name": "m",
                "routeRules": [{
                    "priority": 1,
                    "routeAction": {
                        "faultInjectionPolicy": {"abort": {"httpStatus": 503, "percentage": 100.0}},
                        "weightedBackendServices": [
                            {"backendService": "projects/p/global/backendServices/svc-2", "weight": 100}
                        ]
                    }
                }]
            }]
        }))
        .unwrap();

        assert_eq!(
            map.default_service.as_deref(),
            Some("projects/p/global/backendServices/svc-1")
        );
        let action = map.path_matchers[0].route_rules[0]
            .route_action
            .as_ref()
            .unwrap();
        assert!(action.fault_injection_policy.is_some());
        assert_eq!(action.weighted_backend_services[0].weight, 100);
    }

    #[test]
    fn trailing_segment_of_paths() {
        assert_eq!(
            trailing_segment("https://www.googleapis.com/compute/v1/projects/p/global/backendServices/svc-1"),
            "svc-1"
        );
        assert_eq!(trailing_segment("svc-1"), "svc-1");
        assert_eq!(trailing_segment(""), "");
    }
}
