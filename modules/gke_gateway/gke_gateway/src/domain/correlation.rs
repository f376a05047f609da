//! Correlation between forwarding rules and Kubernetes gateways.
//!
//! GKE writes a small JSON document into the description of every forwarding
//! rule it provisions, e.g.
//! `{"k8sResource":"/namespaces/my-cool-app/gateways/my-gateway-name"}`.
//! Rules created by anything else usually carry free text, which is simply not
//! a match.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ForwardingRuleDescription {
    k8s_resource: Option<String>,
}

/// Correlation key GKE uses for a gateway.
#[must_use]
pub fn correlation_key(namespace: &str, gateway: &str) -> String {
    format!("/namespaces/{namespace}/gateways/{gateway}")
}

/// True iff `description` names exactly this namespace/gateway pair.
#[must_use]
pub fn matches_gateway(description: &str, namespace: &str, gateway: &str) -> bool {
    let Ok(parsed) = serde_json::from_str::<ForwardingRuleDescription>(description) else {
        return false;
    };

    parsed
        .k8s_resource
        .is_some_and(|value| value == correlation_key(namespace, gateway))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const NS: &str = "my-cool-app";
    const GW: &str = "my-gateway-name";

    #[test]
    fn exact_key_matches() {
        assert!(matches_gateway(
            r#"{"k8sResource":"/namespaces/my-cool-app/gateways/my-gateway-name"}"#,
            NS,
            GW
        ));
    }

    #[test]
    fn other_fields_are_ignored() {
        assert!(matches_gateway(
            r#"{"k8sResource":"/namespaces/my-cool-app/gateways/my-gateway-name","k8sClusterName":"c1"}"#,
            NS,
            GW
        ));
    }

    #[test]
    fn non_json_descriptions_do_not_match() {
        for description in ["", "managed by terraform", "{", "[1,2]", "null", "42"] {
            assert!(
                !matches_gateway(description, NS, GW),
                "{description:?} should not match"
            );
        }
    }

    #[test]
    fn missing_or_null_field_does_not_match() {
        assert!(!matches_gateway("{}", NS, GW));
        assert!(!matches_gateway(r#"{"k8sResource":null}"#, NS, GW));
        assert!(!matches_gateway(r#"{"other":"x"}"#, NS, GW));
    }

    #[test]
    fn wrongly_typed_field_does_not_match() {
        assert!(!matches_gateway(r#"{"k8sResource":7}"#, NS, GW));
    }

    #[test]
    fn prefix_suffix_and_case_variants_do_not_match() {
        let variants = [
            "/namespaces/my-cool-app/gateways/my-gateway",
            "/namespaces/my-cool-app/gateways/my-gateway-name-2",
            "/namespaces/my-cool-app/gateways/my-gateway-name/",
            "x/namespaces/my-cool-app/gateways/my-gateway-name",
            "/namespaces/My-Cool-App/gateways/my-gateway-name",
            "/Namespaces/my-cool-app/Gateways/my-gateway-name",
        ];

        for value in variants {
            let description = format!(r#"{{"k8sResource":"{value}"}}"#);
            assert!(
                !matches_gateway(&description, NS, GW),
                "{value} should not match"
            );
        }
    }

    #[test]
    fn namespace_and_gateway_are_not_interchangeable() {
        assert!(!matches_gateway(
            r#"{"k8sResource":"/namespaces/my-gateway-name/gateways/my-cool-app"}"#,
            NS,
            GW
        ));
    }
}
