//! Request and response models for the backend service resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lookup request for the backend service behind a Kubernetes Gateway.
///
/// Constructed once per call and never mutated by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Name of the Kubernetes gateway resource.
    pub gateway: String,
    /// Namespace the gateway resource lives in.
    pub namespace: String,
    /// Project that owns the load balancer.
    pub project: String,
    /// Region of the load balancer. `None` means the load balancer is global.
    pub region: Option<String>,
}

impl ResolutionRequest {
    /// Creates a request for a global load balancer.
    #[must_use]
    pub fn new(
        gateway: impl Into<String>,
        namespace: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            gateway: gateway.into(),
            namespace: namespace.into(),
            project: project.into(),
            region: None,
        }
    }

    /// Restricts the request to a regional load balancer.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Scope every lookup of this request must use.
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

/// Selects the regional or global variant of every compute lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global { project: String },
    Regional { project: String, region: String },
}

impl Scope {
    #[must_use]
    pub fn project(&self) -> &str {
        match self {
            Self::Global { project } | Self::Regional { project, .. } => project,
        }
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::Global { .. } => None,
            Self::Regional { region, .. } => Some(region),
        }
    }

    #[must_use]
    pub fn is_regional(&self) -> bool {
        matches!(self, Self::Regional { .. })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global { project } => write!(f, "projects/{project}/global"),
            Self::Regional { project, region } => {
                write!(f, "projects/{project}/regions/{region}")
            }
        }
    }
}

/// The backend service serving traffic for a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBackendService {
    /// Numeric resource identifier, rendered in decimal.
    pub id: String,
    /// Name of the backend service.
    pub name: String,
}
