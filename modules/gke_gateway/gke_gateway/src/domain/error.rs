//! Domain error types for the gke_gateway module.

use gke_gateway_sdk::{BackendServiceResolverError, CandidateKind, ComputeError, Operation};
use thiserror::Error;

/// Domain-level errors for the backend service resolver.
#[derive(Error, Debug)]
pub enum DomainError {
    /// More than one candidate at a fan-out.
    #[error("Multiple matching {kind} found: {}", .candidates.join(", "))]
    Ambiguous {
        kind: CandidateKind,
        candidates: Vec<String>,
    },

    /// The forwarding rule targets a proxy kind other than `targetHttpsProxies`.
    #[error("Forwarding rule {rule} targets unsupported type {target_kind}")]
    UnsupportedTarget { rule: String, target_kind: String },

    /// A compute API call failed.
    #[error("Failed to {operation}: {source}")]
    Lookup {
        operation: Operation,
        #[source]
        source: ComputeError,
    },

    /// Neither the lookup nor the provider defaults name a project.
    #[error("The project field must be set on either the provider or data source.")]
    MissingProject,
}

impl DomainError {
    #[must_use]
    pub fn lookup(operation: Operation, source: ComputeError) -> Self {
        Self::Lookup { operation, source }
    }
}

impl From<DomainError> for BackendServiceResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Ambiguous { kind, candidates } => Self::Ambiguous { kind, candidates },
            DomainError::UnsupportedTarget { rule, target_kind } => {
                Self::Unsupported { rule, target_kind }
            }
            DomainError::Lookup { operation, source } => Self::LookupFailed { operation, source },
            DomainError::MissingProject => {
                Self::InvalidRequest(DomainError::MissingProject.to_string())
            }
        }
    }
}
