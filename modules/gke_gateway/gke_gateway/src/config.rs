//! Configuration for the gke_gateway module.

use gke_gateway_sdk::ResolutionRequest;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Module configuration.
///
/// Provider-level defaults. A value given on the individual lookup always
/// takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GkeGatewayConfig {
    /// Project the load balancers belong to.
    pub project: Option<String>,

    /// Region the load balancers belong to. Unset means global.
    pub region: Option<String>,
}

impl GkeGatewayConfig {
    /// Builds a request, filling `project` and `region` from the defaults.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingProject` if neither the lookup nor the
    /// defaults name a project.
    pub fn request(
        &self,
        gateway: impl Into<String>,
        namespace: impl Into<String>,
        project: Option<String>,
        region: Option<String>,
    ) -> Result<ResolutionRequest, DomainError> {
        let project = project
            .or_else(|| self.project.clone())
            .ok_or(DomainError::MissingProject)?;

        let mut request = ResolutionRequest::new(gateway, namespace, project);
        request.region = region.or_else(|| self.region.clone());
        Ok(request)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn defaults() -> GkeGatewayConfig {
        GkeGatewayConfig {
            project: Some("provider-project".to_owned()),
            region: Some("europe-west1".to_owned()),
        }
    }

    #[test]
    fn lookup_values_take_precedence() {
        let req = defaults()
            .request(
                "gw",
                "ns",
                Some("my-gcp-project".to_owned()),
                Some("us-central1".to_owned()),
            )
            .unwrap();

        assert_eq!(req.project, "my-gcp-project");
        assert_eq!(req.region.as_deref(), Some("us-central1"));
    }

    #[test]
    fn defaults_fill_missing_values() {
        let req = defaults().request("gw", "ns", None, None).unwrap();

        assert_eq!(req.project, "provider-project");
        assert_eq!(req.region.as_deref(), Some("europe-west1"));
    }

    #[test]
    fn no_region_anywhere_means_global() {
        let cfg = GkeGatewayConfig {
            project: Some("p".to_owned()),
            region: None,
        };
        let req = cfg.request("gw", "ns", None, None).unwrap();

        assert!(!req.scope().is_regional());
    }

    #[test]
    fn missing_project_is_rejected() {
        let err = GkeGatewayConfig::default()
            .request("gw", "ns", None, Some("us-central1".to_owned()))
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingProject));
        assert_eq!(
            err.to_string(),
            "The project field must be set on either the provider or data source."
        );
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let parsed: Result<GkeGatewayConfig, _> =
            serde_json::from_str(r#"{"project": "p", "zone": "us-central1-a"}"#);
        assert!(parsed.is_err());
    }
}
