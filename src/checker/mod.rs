//! Symptom checker: selection set, rule table, classifier, and flow states
//!
//! The classifier is deterministic: fixed keyword groups with fixed
//! thresholds, each activated rule contributing one constant candidate
//! condition. The surrounding flow is a three-state machine
//! (Selecting → Reviewing → Analyzed).

pub mod classifier;
pub mod rules;
pub mod selection;
pub mod state;
pub mod types;

pub use classifier::analyze;
pub use rules::{Activation, ConditionTemplate, Rule, FALLBACK, RULES};
pub use selection::SelectionSet;
pub use state::{CheckerEvent, CheckerFlow, CheckerState};
pub use types::{CandidateCondition, Urgency};
