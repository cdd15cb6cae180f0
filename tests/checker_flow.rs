//! Integration tests for the symptom-checker flow
//!
//! Drives the state machine end to end the way the REPL does.

use healthbuddy::checker::{CheckerEvent, CheckerFlow, CheckerState};
use healthbuddy::HealthError;

#[test]
fn test_full_run_and_reset() {
    let mut flow = CheckerFlow::new();

    flow.toggle("fever").unwrap();
    flow.toggle("fatigue").unwrap();
    flow.toggle("chills").unwrap();
    flow.continue_to_review().unwrap();

    let results = flow.analyze().unwrap().to_vec();
    assert_eq!(results[0].name, "Viral Infection");
    assert_eq!(flow.state(), CheckerState::Analyzed);

    // A second run needs a full reset first
    assert!(flow.analyze().is_err());
    flow.reset().unwrap();
    assert_eq!(flow.state(), CheckerState::Selecting);
    assert!(flow.selection().is_empty());
    assert!(flow.results().is_empty());
}

#[test]
fn test_review_edit_loop() {
    let mut flow = CheckerFlow::new();

    flow.toggle("cough").unwrap();
    flow.toggle("wheezing").unwrap();
    flow.toggle("headache").unwrap();
    flow.continue_to_review().unwrap();

    // Removing while reviewing drops back to Selecting
    flow.remove_symptom("headache").unwrap();
    assert_eq!(flow.state(), CheckerState::Selecting);
    assert_eq!(flow.selection().len(), 2);

    // And the edited selection can still be analyzed
    flow.continue_to_review().unwrap();
    let results = flow.analyze().unwrap();
    assert_eq!(results[0].name, "Upper Respiratory Infection");
}

#[test]
fn test_toggling_everything_off_blocks_review() {
    let mut flow = CheckerFlow::new();

    flow.toggle("nausea").unwrap();
    flow.toggle("nausea").unwrap();

    assert!(matches!(
        flow.continue_to_review(),
        Err(HealthError::EmptySelection)
    ));
}

#[test]
fn test_invalid_events_leave_state_unchanged() {
    let mut flow = CheckerFlow::new();
    flow.toggle("fever").unwrap();

    // Analyze straight from Selecting is rejected and changes nothing
    assert!(flow.analyze().is_err());
    assert_eq!(flow.state(), CheckerState::Selecting);
    assert_eq!(flow.selection().len(), 1);
    assert!(flow.results().is_empty());
}

#[test]
fn test_transition_table_is_exhaustive() {
    use CheckerEvent::*;
    use CheckerState::*;

    let states = [Selecting, Reviewing, Analyzed];
    let events = [Continue, Back, RemoveSymptom, Analyze, Reset];
    let valid = [
        (Selecting, Continue),
        (Reviewing, Back),
        (Reviewing, RemoveSymptom),
        (Reviewing, Analyze),
        (Analyzed, Reset),
    ];

    for state in states {
        for event in events {
            let result = state.transition(event);
            if valid.contains(&(state, event)) {
                assert!(result.is_ok(), "{:?} on {:?} should be valid", state, event);
            } else {
                assert!(
                    matches!(result, Err(HealthError::InvalidTransition { .. })),
                    "{:?} on {:?} should be rejected",
                    state,
                    event
                );
            }
        }
    }
}
