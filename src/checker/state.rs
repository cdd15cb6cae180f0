//! Symptom-checker flow state machine
//!
//! Three states cover the checking flow: the user builds a selection
//! (`Selecting`), reviews it frozen for display (`Reviewing`), and receives
//! classifier output (`Analyzed`). `Analyzed` is terminal for a run; the
//! only way out is a full reset, which clears both the selection and the
//! results.

use crate::checker::classifier::analyze;
use crate::checker::selection::SelectionSet;
use crate::checker::types::CandidateCondition;
use crate::errors::{HealthError, Result};
use serde::{Deserialize, Serialize};

/// Checker flow states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckerState {
    /// Initial state: user toggles symptoms in and out of the selection
    Selecting,

    /// Selection frozen for display; removing an item returns to Selecting
    Reviewing,

    /// Classifier output attached; terminal for this run
    Analyzed,
}

/// Events that drive checker transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerEvent {
    /// Move from selection to review
    Continue,

    /// Return from review to selection without changes
    Back,

    /// Remove a symptom while reviewing (also returns to Selecting)
    RemoveSymptom,

    /// Run the classifier on the reviewed selection
    Analyze,

    /// Clear everything and start over
    Reset,
}

impl CheckerState {
    /// Attempt a state transition.
    ///
    /// Valid transitions:
    /// - Selecting → Reviewing  (Continue)
    /// - Reviewing → Selecting  (Back | RemoveSymptom)
    /// - Reviewing → Analyzed   (Analyze)
    /// - Analyzed  → Selecting  (Reset)
    ///
    /// Everything else is rejected.
    pub fn transition(&self, event: CheckerEvent) -> Result<CheckerState> {
        use CheckerEvent::*;
        use CheckerState::*;

        let next = match (self, event) {
            (Selecting, Continue) => Reviewing,
            (Reviewing, Back) => Selecting,
            (Reviewing, RemoveSymptom) => Selecting,
            (Reviewing, Analyze) => Analyzed,
            (Analyzed, Reset) => Selecting,

            (from, event) => {
                return Err(HealthError::InvalidTransition {
                    from: format!("{:?}", from),
                    to: format!("(via {:?})", event),
                    reason: format!("No valid transition from {:?} on {:?}", from, event),
                });
            }
        };

        Ok(next)
    }

    /// Human-readable state name
    pub fn display_name(&self) -> &'static str {
        match self {
            CheckerState::Selecting => "Select Your Symptoms",
            CheckerState::Reviewing => "Review Selection",
            CheckerState::Analyzed => "Analysis Complete",
        }
    }

    /// 1-based step number for progress display
    pub fn step(&self) -> usize {
        match self {
            CheckerState::Selecting => 1,
            CheckerState::Reviewing => 2,
            CheckerState::Analyzed => 3,
        }
    }
}

/// The symptom-checking flow: state, selection, and results together
#[derive(Debug, Clone, Default)]
pub struct CheckerFlow {
    state: CheckerState,
    selection: SelectionSet,
    results: Vec<CandidateCondition>,
}

impl Default for CheckerState {
    fn default() -> Self {
        CheckerState::Selecting
    }
}

impl CheckerFlow {
    /// Start a new flow in `Selecting` with an empty selection
    pub fn new() -> Self {
        CheckerFlow::default()
    }

    pub fn state(&self) -> CheckerState {
        self.state
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn results(&self) -> &[CandidateCondition] {
        &self.results
    }

    /// Toggle a symptom; only meaningful while selecting
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        if self.state != CheckerState::Selecting {
            return Err(HealthError::InvalidTransition {
                from: format!("{:?}", self.state),
                to: "Selecting".to_string(),
                reason: "Symptoms can only be toggled while selecting".to_string(),
            });
        }
        self.selection.toggle(id)
    }

    /// Freeze the selection for review.
    ///
    /// Guarded: an empty selection cannot proceed, matching the UI's
    /// "no symptoms selected" gate.
    pub fn continue_to_review(&mut self) -> Result<()> {
        if self.selection.is_empty() {
            return Err(HealthError::EmptySelection);
        }
        self.state = self.state.transition(CheckerEvent::Continue)?;
        Ok(())
    }

    /// Return from review to selection
    pub fn back_to_selection(&mut self) -> Result<()> {
        self.state = self.state.transition(CheckerEvent::Back)?;
        Ok(())
    }

    /// Remove a symptom while reviewing; moves the flow back to Selecting
    pub fn remove_symptom(&mut self, id: &str) -> Result<()> {
        self.state = self.state.transition(CheckerEvent::RemoveSymptom)?;
        if self.selection.contains(id) {
            self.selection.toggle(id)?;
        }
        Ok(())
    }

    /// Run the classifier and attach the results
    pub fn analyze(&mut self) -> Result<&[CandidateCondition]> {
        let next = self.state.transition(CheckerEvent::Analyze)?;
        self.results = analyze(&self.selection)?;
        self.state = next;
        Ok(&self.results)
    }

    /// Full reset: back to `Selecting` with empty selection and results
    pub fn reset(&mut self) -> Result<()> {
        self.state = self.state.transition(CheckerEvent::Reset)?;
        self.selection.clear();
        self.results.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert_eq!(
            CheckerState::Selecting.transition(CheckerEvent::Continue).unwrap(),
            CheckerState::Reviewing
        );
        assert_eq!(
            CheckerState::Reviewing.transition(CheckerEvent::Back).unwrap(),
            CheckerState::Selecting
        );
        assert_eq!(
            CheckerState::Reviewing.transition(CheckerEvent::RemoveSymptom).unwrap(),
            CheckerState::Selecting
        );
        assert_eq!(
            CheckerState::Reviewing.transition(CheckerEvent::Analyze).unwrap(),
            CheckerState::Analyzed
        );
        assert_eq!(
            CheckerState::Analyzed.transition(CheckerEvent::Reset).unwrap(),
            CheckerState::Selecting
        );
    }

    #[test]
    fn test_invalid_transitions() {
        // Cannot analyze straight from Selecting
        assert!(CheckerState::Selecting.transition(CheckerEvent::Analyze).is_err());
        // Cannot continue past Analyzed; only reset leaves it
        assert!(CheckerState::Analyzed.transition(CheckerEvent::Continue).is_err());
        assert!(CheckerState::Analyzed.transition(CheckerEvent::Analyze).is_err());
        // Reset is not valid mid-selection
        assert!(CheckerState::Selecting.transition(CheckerEvent::Reset).is_err());
    }

    #[test]
    fn test_determinism() {
        let first = CheckerState::Selecting.transition(CheckerEvent::Continue);
        let second = CheckerState::Selecting.transition(CheckerEvent::Continue);
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_flow_happy_path() {
        let mut flow = CheckerFlow::new();
        assert_eq!(flow.state(), CheckerState::Selecting);

        flow.toggle("cough").unwrap();
        flow.toggle("wheezing").unwrap();
        flow.continue_to_review().unwrap();
        assert_eq!(flow.state(), CheckerState::Reviewing);

        let results = flow.analyze().unwrap();
        assert!(!results.is_empty());
        assert_eq!(flow.state(), CheckerState::Analyzed);
    }

    #[test]
    fn test_empty_selection_cannot_continue() {
        let mut flow = CheckerFlow::new();
        assert!(matches!(
            flow.continue_to_review(),
            Err(HealthError::EmptySelection)
        ));
        assert_eq!(flow.state(), CheckerState::Selecting);
    }

    #[test]
    fn test_remove_symptom_returns_to_selecting() {
        let mut flow = CheckerFlow::new();
        flow.toggle("fever").unwrap();
        flow.toggle("chills").unwrap();
        flow.continue_to_review().unwrap();

        flow.remove_symptom("chills").unwrap();
        assert_eq!(flow.state(), CheckerState::Selecting);
        assert!(!flow.selection().contains("chills"));
        assert!(flow.selection().contains("fever"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut flow = CheckerFlow::new();
        flow.toggle("cough").unwrap();
        flow.toggle("sore_throat").unwrap();
        flow.continue_to_review().unwrap();
        flow.analyze().unwrap();
        assert!(!flow.results().is_empty());

        flow.reset().unwrap();
        assert_eq!(flow.state(), CheckerState::Selecting);
        assert!(flow.selection().is_empty());
        assert!(flow.results().is_empty());
    }

    #[test]
    fn test_toggle_rejected_outside_selecting() {
        let mut flow = CheckerFlow::new();
        flow.toggle("cough").unwrap();
        flow.continue_to_review().unwrap();

        assert!(flow.toggle("fever").is_err());
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(CheckerState::Selecting.step(), 1);
        assert_eq!(CheckerState::Reviewing.step(), 2);
        assert_eq!(CheckerState::Analyzed.step(), 3);
    }
}
