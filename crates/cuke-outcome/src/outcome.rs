//! The three-state outcome and its visitor.

use std::fmt;

/// Receives the calls an [`Outcome`] makes when described.
///
/// `A` is extra context forwarded unchanged to every call, such as a
/// reporter's indentation level or the step being reported.
pub trait OutcomeVisitor<E, A = ()> {
    /// The subject passed.
    fn passed(&mut self, args: &A);

    /// The subject failed; [`exception`](Self::exception) follows.
    fn failed(&mut self, args: &A);

    /// The cause of the preceding failure.
    fn exception(&mut self, cause: &E, args: &A);
}

/// Result of running a subject, e.g. a step or a scenario.
///
/// # Examples
///
/// ```
/// use cuke_outcome::Outcome;
///
/// let outcome: Outcome<&str, String> = Outcome::Failed("step", "boom".into());
/// assert_eq!(outcome.to_string(), "✗");
/// assert_eq!(outcome.cause().map(String::as_str), Some("boom"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<S, E> {
    /// Not executed yet.
    Unknown(S),
    /// Executed without error.
    Passed(S),
    /// Executed and failed with a cause.
    Failed(S, E),
}

impl<S, E> Outcome<S, E> {
    /// The subject this outcome describes.
    #[must_use]
    pub fn subject(&self) -> &S {
        match self {
            Self::Unknown(subject) | Self::Passed(subject) | Self::Failed(subject, _) => subject,
        }
    }

    /// The failure cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&E> {
        match self {
            Self::Failed(_, cause) => Some(cause),
            Self::Unknown(_) | Self::Passed(_) => None,
        }
    }

    /// Returns `true` for [`Outcome::Unknown`].
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Returns `true` for [`Outcome::Passed`].
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }

    /// Returns `true` for [`Outcome::Failed`].
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(..))
    }

    /// Lowercase label of the variant.
    ///
    /// # Examples
    /// ```
    /// use cuke_outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<(), ()>::Passed(()).label(), "passed");
    /// ```
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "unknown",
            Self::Passed(_) => "passed",
            Self::Failed(..) => "failed",
        }
    }

    /// Short glyph for the variant; unknown outcomes have none.
    #[must_use]
    pub const fn glyph(&self) -> Option<&'static str> {
        match self {
            Self::Unknown(_) => None,
            Self::Passed(_) => Some("✓"),
            Self::Failed(..) => Some("✗"),
        }
    }

    /// Report this outcome to `visitor`, forwarding `args` to every call.
    ///
    /// Unknown calls nothing, passed calls `passed`, and failed calls
    /// `failed` then `exception`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuke_outcome::{Outcome, Tally};
    ///
    /// let mut tally = Tally::default();
    /// Outcome::<_, String>::Passed("a").describe_to(&mut tally, &());
    /// Outcome::Failed("b", "boom".to_owned()).describe_to(&mut tally, &());
    /// assert_eq!((tally.passed(), tally.failed()), (1, 1));
    /// assert_eq!(tally.causes(), ["boom"]);
    /// ```
    pub fn describe_to<V, A>(&self, visitor: &mut V, args: &A)
    where
        V: OutcomeVisitor<E, A> + ?Sized,
    {
        match self {
            Self::Unknown(_) => {}
            Self::Passed(_) => visitor.passed(args),
            Self::Failed(_, cause) => {
                visitor.failed(args);
                visitor.exception(cause, args);
            }
        }
    }

    /// Replace the subject, keeping the variant and cause.
    #[must_use]
    pub fn map_subject<T, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            Self::Unknown(subject) => Outcome::Unknown(f(subject)),
            Self::Passed(subject) => Outcome::Passed(f(subject)),
            Self::Failed(subject, cause) => Outcome::Failed(f(subject), cause),
        }
    }
}

impl<S, E> fmt::Display for Outcome<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Step = Outcome<&'static str, &'static str>;

    #[rstest]
    #[case(Step::Unknown("s"), "unknown", "")]
    #[case(Step::Passed("s"), "passed", "✓")]
    #[case(Step::Failed("s", "e"), "failed", "✗")]
    fn label_and_rendering(#[case] outcome: Step, #[case] label: &str, #[case] rendered: &str) {
        assert_eq!(outcome.label(), label);
        assert_eq!(outcome.to_string(), rendered);
        assert_eq!(outcome.subject(), &"s");
    }

    #[test]
    fn only_failures_have_a_cause() {
        assert_eq!(Step::Failed("s", "e").cause(), Some(&"e"));
        assert_eq!(Step::Passed("s").cause(), None);
        assert_eq!(Step::Unknown("s").cause(), None);
    }

    #[test]
    fn predicates_match_exactly_one_variant() {
        let outcomes = [Step::Unknown("s"), Step::Passed("s"), Step::Failed("s", "e")];
        for outcome in &outcomes {
            let hits = [outcome.is_unknown(), outcome.is_passed(), outcome.is_failed()];
            assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        }
    }

    #[test]
    fn map_subject_keeps_variant_and_cause() {
        let mapped = Step::Failed("step", "boom").map_subject(str::len);
        assert_eq!(mapped, Outcome::Failed(4, "boom"));
    }
}
