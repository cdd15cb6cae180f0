//! Integration tests for the symptom classifier
//!
//! Exercises the full selection-to-candidates path against the rule table.

use healthbuddy::catalog::SeverityClass;
use healthbuddy::checker::{analyze, SelectionSet, Urgency};
use healthbuddy::HealthError;

fn select(ids: &[&str]) -> SelectionSet {
    let mut selection = SelectionSet::new();
    for id in ids {
        selection.toggle(id).unwrap();
    }
    selection
}

#[test]
fn test_empty_selection_is_an_error() {
    let result = analyze(&SelectionSet::new());
    assert!(matches!(result, Err(HealthError::EmptySelection)));
}

#[test]
fn test_respiratory_pair_produces_uri() {
    let candidates = analyze(&select(&["cough", "sore_throat"])).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "Upper Respiratory Infection");
    assert_eq!(candidates[0].probability, 75);
    assert_eq!(candidates[0].severity, SeverityClass::Medium);
    assert_eq!(candidates[0].urgency, Urgency::Routine);
}

#[test]
fn test_cardiac_pair_produces_urgent_candidate() {
    let candidates = analyze(&select(&["chest_pain", "rapid_heartbeat"])).unwrap();

    assert_eq!(candidates[0].name, "Cardiac-Related Symptoms");
    assert_eq!(candidates[0].probability, 60);
    assert_eq!(candidates[0].severity, SeverityClass::High);
    assert_eq!(candidates[0].urgency, Urgency::Urgent);
}

#[test]
fn test_fever_with_three_total_produces_viral_infection() {
    let candidates = analyze(&select(&["fever", "fatigue", "chills"])).unwrap();

    assert_eq!(candidates[0].name, "Viral Infection");
    assert_eq!(candidates[0].probability, 80);
}

#[test]
fn test_fever_alone_falls_back() {
    // Fever without two more symptoms does not fire the compound rule
    let candidates = analyze(&select(&["fever"])).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "General Health Concern");
    assert_eq!(candidates[0].probability, 50);
    assert_eq!(candidates[0].severity, SeverityClass::Low);
}

#[test]
fn test_overlapping_groups_sorted_by_probability() {
    // chest_pain and shortness_breath sit in both the respiratory and the
    // cardiac group, so both rules fire; respiratory (75) ranks first
    let candidates = analyze(&select(&["chest_pain", "shortness_breath"])).unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].name, "Upper Respiratory Infection");
    assert_eq!(candidates[1].name, "Cardiac-Related Symptoms");

    let probabilities: Vec<u8> = candidates.iter().map(|c| c.probability).collect();
    assert_eq!(probabilities, [75, 60]);
}

#[test]
fn test_neurological_pair() {
    let candidates = analyze(&select(&["dizziness", "vision_problems"])).unwrap();

    assert_eq!(candidates[0].name, "Neurological Symptoms");
    assert_eq!(candidates[0].probability, 65);
    assert_eq!(candidates[0].urgency, Urgency::Soon);
}

#[test]
fn test_unrelated_symptoms_fall_back() {
    let candidates = analyze(&select(&["joint_pain", "back_pain"])).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "General Health Concern");
}

#[test]
fn test_unknown_symptom_rejected_at_selection() {
    let mut selection = SelectionSet::new();
    let result = selection.toggle("tentacles");
    assert!(matches!(result, Err(HealthError::UnknownSymptom(_))));
}

#[test]
fn test_analysis_is_deterministic() {
    let selection = select(&["fever", "cough", "fatigue", "headache", "dizziness"]);

    let first = analyze(&selection).unwrap();
    let second = analyze(&selection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_candidate_has_actions() {
    let selection = select(&["fever", "cough", "chest_pain", "headache", "dizziness"]);

    for candidate in analyze(&selection).unwrap() {
        assert!(!candidate.recommended_actions.is_empty());
        assert!(!candidate.description.is_empty());
        assert!(candidate.probability <= 100);
    }
}
