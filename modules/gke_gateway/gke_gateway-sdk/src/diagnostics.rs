//! User-facing outcome of a resolution.
//!
//! A [`Resolution`] carries either the resolved backend service, nothing (no
//! match), or exactly one error [`Diagnostic`] describing why the lookup stopped.

use serde::{Deserialize, Serialize};

use crate::error::{BackendServiceResolverError, CandidateKind, Operation};
use crate::models::ResolvedBackendService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    #[must_use]
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl From<&BackendServiceResolverError> for Diagnostic {
    fn from(err: &BackendServiceResolverError) -> Self {
        match err {
            BackendServiceResolverError::Ambiguous { kind, candidates } => {
                let summary = match kind {
                    CandidateKind::ForwardingRule => "Multiple matching forwarding rules found",
                    CandidateKind::BackendService => "Multiple backend services found",
                };
                Self::error(summary, candidate_listing(*kind, candidates))
            }
            BackendServiceResolverError::Unsupported { rule, target_kind } => Self::error(
                "Unsupported target type for forwarding rule",
                format!(
                    "The {rule} forwarding rule has a target with a type of {target_kind} \
                     which is currently unsupported by this provider."
                ),
            ),
            BackendServiceResolverError::LookupFailed { operation, source } => {
                let summary = match operation {
                    Operation::ListForwardingRules => {
                        "Unable to iterate over forwarding rules".to_owned()
                    }
                    Operation::GetTargetHttpsProxy(name) => {
                        format!("Error looking up HTTPS target proxy {name}")
                    }
                    Operation::GetUrlMap(name) => format!("Error looking up URL map {name}"),
                    Operation::GetBackendService(name) => {
                        format!("Error looking up backend service {name}")
                    }
                };
                Self::error(summary, format!("Error calling Google API: {source}"))
            }
            BackendServiceResolverError::InvalidRequest(msg) => {
                Self::error("Invalid request", msg.clone())
            }
            BackendServiceResolverError::Internal(msg) => {
                Self::error("Internal error", msg.clone())
            }
        }
    }
}

/// One label per line, in encounter order.
fn candidate_listing(kind: CandidateKind, candidates: &[String]) -> String {
    let labels: String = candidates.iter().map(|l| format!("  - {l}\n")).collect();
    format!("The following {kind} matched:\n\n{labels}")
}

/// Outcome handed to the caller's presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// `None` when nothing matched or the lookup failed.
    pub backend_service: Option<ResolvedBackendService>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

impl From<Result<Option<ResolvedBackendService>, BackendServiceResolverError>> for Resolution {
    fn from(result: Result<Option<ResolvedBackendService>, BackendServiceResolverError>) -> Self {
        match result {
            Ok(backend_service) => Self {
                backend_service,
                diagnostics: Vec::new(),
            },
            Err(err) => Self {
                backend_service: None,
                diagnostics: vec![Diagnostic::from(&err)],
            },
        }
    }
}
