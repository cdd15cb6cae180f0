//! Declarative rule table for the symptom classifier
//!
//! Each rule pairs an activation test with a constant output template. The
//! classifier evaluates the table with one loop; adding a condition means
//! adding a row here, not touching control flow.

use crate::catalog::SeverityClass;
use crate::checker::selection::SelectionSet;
use crate::checker::types::{CandidateCondition, Urgency};

/// Activation test over the selection set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Fires when |selection ∩ group| >= threshold
    GroupThreshold {
        group: &'static [&'static str],
        threshold: usize,
    },
    /// Fires when a named symptom is selected and the total selection count
    /// meets a minimum (the compound "systemic" rule)
    AnchorWithMinimum {
        anchor: &'static str,
        min_selected: usize,
    },
}

impl Activation {
    /// Evaluate this activation against a selection set
    pub fn fires(&self, selection: &SelectionSet) -> bool {
        match self {
            Activation::GroupThreshold { group, threshold } => {
                selection.intersection_size(group) >= *threshold
            }
            Activation::AnchorWithMinimum {
                anchor,
                min_selected,
            } => selection.contains(anchor) && selection.len() >= *min_selected,
        }
    }
}

/// Constant output attached to a rule
#[derive(Debug, Clone, Copy)]
pub struct ConditionTemplate {
    pub name: &'static str,
    pub probability: u8,
    pub severity: SeverityClass,
    pub description: &'static str,
    pub recommended_actions: &'static [&'static str],
    pub urgency: Urgency,
}

impl ConditionTemplate {
    /// Materialize this template as a candidate condition
    pub fn to_candidate(&self) -> CandidateCondition {
        CandidateCondition {
            name: self.name.to_string(),
            probability: self.probability,
            severity: self.severity,
            description: self.description.to_string(),
            recommended_actions: self
                .recommended_actions
                .iter()
                .map(|a| a.to_string())
                .collect(),
            urgency: self.urgency,
        }
    }
}

/// One classifier rule: (name, activation, output template)
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub activation: Activation,
    pub template: ConditionTemplate,
}

/// The fixed rule table, in definition order.
///
/// Definition order is the tie-break for equal probabilities: the classifier
/// sorts stably, so earlier rows rank first among ties.
pub const RULES: &[Rule] = &[
    Rule {
        name: "respiratory",
        activation: Activation::GroupThreshold {
            group: &["cough", "shortness_breath", "chest_pain", "wheezing", "sore_throat"],
            threshold: 2,
        },
        template: ConditionTemplate {
            name: "Upper Respiratory Infection",
            probability: 75,
            severity: SeverityClass::Medium,
            description: "Common viral or bacterial infection affecting the upper respiratory tract.",
            recommended_actions: &[
                "Rest and stay hydrated",
                "Use humidifier or steam inhalation",
                "Consider over-the-counter medications for symptom relief",
                "Consult healthcare provider if symptoms persist or worsen",
            ],
            urgency: Urgency::Routine,
        },
    },
    Rule {
        name: "cardiac",
        activation: Activation::GroupThreshold {
            group: &["chest_pain", "chest_pressure", "shortness_breath", "rapid_heartbeat", "fainting"],
            threshold: 2,
        },
        template: ConditionTemplate {
            name: "Cardiac-Related Symptoms",
            probability: 60,
            severity: SeverityClass::High,
            description: "Symptoms that may indicate cardiovascular issues requiring medical attention.",
            recommended_actions: &[
                "Seek immediate medical attention if severe",
                "Monitor symptoms closely",
                "Avoid strenuous activity",
                "Call emergency services if chest pain is severe",
            ],
            urgency: Urgency::Urgent,
        },
    },
    Rule {
        name: "viral",
        activation: Activation::AnchorWithMinimum {
            anchor: "fever",
            min_selected: 3,
        },
        template: ConditionTemplate {
            name: "Viral Infection",
            probability: 80,
            severity: SeverityClass::Medium,
            description: "Common viral illness with multiple systemic symptoms.",
            recommended_actions: &[
                "Get plenty of rest",
                "Stay hydrated with fluids",
                "Monitor temperature regularly",
                "Seek medical care if fever persists over 3 days",
            ],
            urgency: Urgency::Routine,
        },
    },
    Rule {
        name: "neurological",
        activation: Activation::GroupThreshold {
            group: &["headache", "dizziness", "confusion", "vision_problems", "numbness"],
            threshold: 2,
        },
        template: ConditionTemplate {
            name: "Neurological Symptoms",
            probability: 65,
            severity: SeverityClass::Medium,
            description: "Symptoms affecting the nervous system that may require evaluation.",
            recommended_actions: &[
                "Track symptom patterns and triggers",
                "Ensure adequate rest and hydration",
                "Avoid driving if experiencing dizziness",
                "Consult healthcare provider for proper evaluation",
            ],
            urgency: Urgency::Soon,
        },
    },
];

/// Fallback emitted when no rule fires on a non-empty selection
pub const FALLBACK: ConditionTemplate = ConditionTemplate {
    name: "General Health Concern",
    probability: 50,
    severity: SeverityClass::Low,
    description: "Your symptoms may indicate a minor health issue or normal variation.",
    recommended_actions: &[
        "Monitor symptoms for changes",
        "Maintain good self-care practices",
        "Consider lifestyle factors that might contribute",
        "Consult healthcare provider if symptoms persist or worsen",
    ],
    urgency: Urgency::Routine,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::symptoms::find_symptom;

    fn selection_of(ids: &[&str]) -> SelectionSet {
        let mut selection = SelectionSet::new();
        for id in ids {
            selection.toggle(id).unwrap();
        }
        selection
    }

    #[test]
    fn test_group_threshold_fires_at_threshold() {
        let rule = &RULES[0];
        assert!(rule.activation.fires(&selection_of(&["cough", "wheezing"])));
        assert!(!rule.activation.fires(&selection_of(&["cough"])));
    }

    #[test]
    fn test_anchor_rule_requires_both_conditions() {
        let viral = RULES.iter().find(|r| r.name == "viral").unwrap();

        // fever alone is below the minimum count
        assert!(!viral.activation.fires(&selection_of(&["fever"])));
        // three symptoms without fever do not fire
        assert!(!viral
            .activation
            .fires(&selection_of(&["fatigue", "chills", "sweating"])));
        // fever plus two others fires
        assert!(viral
            .activation
            .fires(&selection_of(&["fever", "fatigue", "chills"])));
    }

    #[test]
    fn test_rule_groups_reference_catalog_symptoms() {
        for rule in RULES {
            match rule.activation {
                Activation::GroupThreshold { group, .. } => {
                    for id in group {
                        assert!(find_symptom(id).is_some(), "unknown id {} in rule {}", id, rule.name);
                    }
                }
                Activation::AnchorWithMinimum { anchor, .. } => {
                    assert!(find_symptom(anchor).is_some());
                }
            }
        }
    }

    #[test]
    fn test_template_materialization() {
        let candidate = FALLBACK.to_candidate();
        assert_eq!(candidate.name, "General Health Concern");
        assert_eq!(candidate.probability, 50);
        assert_eq!(candidate.recommended_actions.len(), 4);
    }
}
