//! Per-attempt validation session
//!
//! Every submission attempt gets a fresh [`Submission`]. It owns the error
//! slot for that attempt and records the phases the attempt went through:
//!
//! ```text
//! Idle -> Validating(0) -> Validating(1) -> ... -> Passed    -> Reporting
//!                                  \-> Failed(i)            -> Reporting
//! ```

use crate::state::ErrorState;

/// Step of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing evaluated yet.
    Idle,
    /// Evaluating the field at this position in the plan.
    Validating(usize),
    /// The field at this position failed; remaining fields are skipped.
    Failed(usize),
    /// Every field passed.
    Passed,
    /// Callbacks are running.
    Reporting,
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    status: bool,
    errors: ErrorState,
    fields_checked: usize,
    phases: Vec<Phase>,
}

impl Submission {
    pub(crate) fn begin() -> Self {
        Self {
            status: true,
            errors: ErrorState::new(),
            fields_checked: 0,
            phases: vec![Phase::Idle],
        }
    }

    pub(crate) fn validating(&mut self, index: usize) {
        self.fields_checked += 1;
        self.phases.push(Phase::Validating(index));
    }

    pub(crate) fn fail(&mut self, index: usize) {
        self.status = false;
        self.phases.push(Phase::Failed(index));
    }

    pub(crate) fn finish(&mut self) {
        if self.status {
            self.phases.push(Phase::Passed);
        }
        self.phases.push(Phase::Reporting);
    }

    pub(crate) fn errors_mut(&mut self) -> &mut ErrorState {
        &mut self.errors
    }

    /// `true` if the submission may proceed.
    pub fn status(&self) -> bool {
        self.status
    }

    /// Shorthand for `status()`.
    pub fn is_valid(&self) -> bool {
        self.status
    }

    /// The error recorded during this attempt.
    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Number of fields evaluated, including ones whose selector matched
    /// nothing.
    pub fn fields_checked(&self) -> usize {
        self.fields_checked
    }

    /// Phases in the order they were entered.
    pub fn phase_trail(&self) -> &[Phase] {
        &self.phases
    }

    /// Last phase entered.
    pub fn phase(&self) -> Phase {
        self.phases.last().copied().unwrap_or(Phase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_idle_and_valid() {
        let s = Submission::begin();
        assert!(s.status());
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.fields_checked(), 0);
        assert!(s.errors().is_empty());
    }

    #[test]
    fn passing_trail() {
        let mut s = Submission::begin();
        s.validating(0);
        s.validating(1);
        s.finish();
        assert_eq!(
            s.phase_trail(),
            [
                Phase::Idle,
                Phase::Validating(0),
                Phase::Validating(1),
                Phase::Passed,
                Phase::Reporting
            ]
        );
        assert_eq!(s.fields_checked(), 2);
    }

    #[test]
    fn failing_trail_skips_passed() {
        let mut s = Submission::begin();
        s.validating(0);
        s.fail(0);
        s.finish();
        assert!(!s.is_valid());
        assert_eq!(
            s.phase_trail(),
            [
                Phase::Idle,
                Phase::Validating(0),
                Phase::Failed(0),
                Phase::Reporting
            ]
        );
    }
}
