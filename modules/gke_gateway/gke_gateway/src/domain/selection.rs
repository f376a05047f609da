//! "Exactly one of N" selection applied at every fan-out.

use gke_gateway_sdk::CandidateKind;

use super::error::DomainError;

/// Picks the sole candidate.
///
/// - no candidates: `Ok(None)`
/// - one candidate: `Ok(Some(candidate))`
/// - more: `Ambiguous`, listing every label in input order
///
/// # Errors
///
/// Returns `DomainError::Ambiguous` when two or more candidates remain.
pub fn exactly_one<T>(
    candidates: Vec<T>,
    kind: CandidateKind,
    label: impl Fn(&T) -> String,
) -> Result<Option<T>, DomainError> {
    if candidates.len() > 1 {
        return Err(DomainError::Ambiguous {
            kind,
            candidates: candidates.iter().map(label).collect(),
        });
    }

    Ok(candidates.into_iter().next())
}
