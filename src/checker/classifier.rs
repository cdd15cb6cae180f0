//! Rule-based symptom classifier
//!
//! Pure function of the selection set and the fixed rule table: no I/O, no
//! randomness, no clock. Given a non-empty selection it always produces a
//! non-empty, probability-ordered list of candidate conditions.

use crate::checker::rules::{FALLBACK, RULES};
use crate::checker::selection::SelectionSet;
use crate::checker::types::CandidateCondition;
use crate::errors::{HealthError, Result};

/// Analyze a selection set against the rule table.
///
/// Each activated rule contributes exactly one candidate with that rule's
/// constant output. When nothing activates, a single low-severity fallback
/// is emitted, so the result is never empty.
///
/// Results are sorted by probability descending with a stable sort; equal
/// probabilities keep rule-definition order.
///
/// # Errors
///
/// Returns [`HealthError::EmptySelection`] for an empty selection set. The
/// UI gates this call, but a bypassed guard must fail rather than fabricate
/// output.
pub fn analyze(selection: &SelectionSet) -> Result<Vec<CandidateCondition>> {
    if selection.is_empty() {
        return Err(HealthError::EmptySelection);
    }

    let mut candidates: Vec<CandidateCondition> = RULES
        .iter()
        .filter(|rule| rule.activation.fires(selection))
        .map(|rule| rule.template.to_candidate())
        .collect();

    if candidates.is_empty() {
        candidates.push(FALLBACK.to_candidate());
    }

    // Stable: ties keep rule-definition order
    candidates.sort_by(|a, b| b.probability.cmp(&a.probability));

    Ok(candidates)
}
