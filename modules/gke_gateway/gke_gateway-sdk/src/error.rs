//! Error types for the gke_gateway module.

use std::fmt;

use thiserror::Error;

/// Errors returned by a [`ComputeClient`](crate::ComputeClient) implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComputeError {
    /// The resource, or the whole scope for list calls, does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the API error envelope, or the raw body.
        message: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected resource.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ComputeError {
    /// True for the "scope or resource absent" signal.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Which fan-out produced more than one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    ForwardingRule,
    BackendService,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForwardingRule => f.write_str("forwarding rules"),
            Self::BackendService => f.write_str("backend services"),
        }
    }
}

/// Compute API call made by one resolution stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListForwardingRules,
    GetTargetHttpsProxy(String),
    GetUrlMap(String),
    GetBackendService(String),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListForwardingRules => f.write_str("list forwarding rules"),
            Self::GetTargetHttpsProxy(name) => write!(f, "get target HTTPS proxy {name}"),
            Self::GetUrlMap(name) => write!(f, "get URL map {name}"),
            Self::GetBackendService(name) => write!(f, "get backend service {name}"),
        }
    }
}

/// Errors that can occur when resolving a gateway's backend service.
///
/// "Nothing found" is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendServiceResolverError {
    /// More than one candidate survived a fan-out.
    #[error("multiple matching {kind} found: {}", .candidates.join(", "))]
    Ambiguous {
        kind: CandidateKind,
        /// Candidate labels in encounter order.
        candidates: Vec<String>,
    },

    /// The forwarding rule points at a proxy kind other than `targetHttpsProxies`.
    #[error("forwarding rule {rule} targets unsupported proxy kind {target_kind}")]
    Unsupported { rule: String, target_kind: String },

    /// A compute API call failed.
    #[error("{operation} failed: {source}")]
    LookupFailed {
        operation: Operation,
        #[source]
        source: ComputeError,
    },

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
