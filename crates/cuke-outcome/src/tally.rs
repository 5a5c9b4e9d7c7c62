//! Counting visitor.

use std::fmt::Display;

use crate::OutcomeVisitor;

/// Counts passes and failures and keeps every failure cause as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    passed: usize,
    failed: usize,
    causes: Vec<String>,
}

impl Tally {
    /// Number of passed outcomes seen.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failed outcomes seen.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Rendered failure causes, in the order they were reported.
    #[must_use]
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// Returns `true` when no failure has been seen.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl<E: Display, A> OutcomeVisitor<E, A> for Tally {
    fn passed(&mut self, _args: &A) {
        self.passed += 1;
    }

    fn failed(&mut self, _args: &A) {
        self.failed += 1;
    }

    fn exception(&mut self, cause: &E, _args: &A) {
        self.causes.push(cause.to_string());
    }
}
