//! Output types for the symptom classifier

use crate::catalog::SeverityClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How soon professional evaluation is recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Soon,
    Urgent,
    Emergency,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Urgency::Routine => "routine",
            Urgency::Soon => "soon",
            Urgency::Urgent => "urgent",
            Urgency::Emergency => "emergency",
        };
        write!(f, "{}", name)
    }
}

/// One ranked classifier output
///
/// Every field is a constant attached to the rule that produced it; nothing
/// is computed from match strength. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCondition {
    pub name: String,
    /// Fixed per-rule score in 0..=100, not a statistical estimate
    pub probability: u8,
    pub severity: SeverityClass,
    pub description: String,
    pub recommended_actions: Vec<String>,
    pub urgency: Urgency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_ordering() {
        assert!(Urgency::Routine < Urgency::Soon);
        assert!(Urgency::Urgent < Urgency::Emergency);
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate = CandidateCondition {
            name: "Viral Infection".to_string(),
            probability: 80,
            severity: SeverityClass::Medium,
            description: "Common viral illness.".to_string(),
            recommended_actions: vec!["Get plenty of rest".to_string()],
            urgency: Urgency::Routine,
        };

        let json = serde_json::to_string(&candidate).unwrap();
        assert!(json.contains("\"routine\""));
        let back: CandidateCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidate);
    }
}
