//! Execution outcomes for test subjects and the visitor protocol used to
//! report them.
//!
//! An [`Outcome`] decides which [`OutcomeVisitor`] methods fire and in which
//! order; the visitor decides what each call means. Outcomes are plain data:
//! a failure carries its cause as a value and nothing here ever panics or
//! re-raises it.

mod outcome;
mod tally;

pub use outcome::{Outcome, OutcomeVisitor};
pub use tally::Tally;
