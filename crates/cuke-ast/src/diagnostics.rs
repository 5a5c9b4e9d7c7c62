//! Parser-reported syntax errors and where they go.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A syntax error reported by the external parser.
///
/// The listener never fails because of one; it forwards the payload to its
/// [`DiagnosticSink`] and keeps building whatever is still recoverable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SyntaxError {
    /// Parser state name at the point of failure.
    pub parser_state: String,
    /// The event the parser could not accept.
    pub offending_event: String,
    /// Events the parser would have accepted instead.
    pub legal_events: Vec<String>,
    /// One-based source line.
    pub line: usize,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: unexpected {} in state {}, expected one of: {}",
            self.line,
            self.offending_event,
            self.parser_state,
            self.legal_events.join(", ")
        )
    }
}

/// Receives syntax errors as the listener sees them.
pub trait DiagnosticSink {
    /// Handle one syntax error. Must not panic.
    fn syntax_error(&mut self, error: SyntaxError);
}

/// Sink that discards every syntax error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IgnoreDiagnostics;

impl DiagnosticSink for IgnoreDiagnostics {
    fn syntax_error(&mut self, _error: SyntaxError) {}
}

/// Sink that keeps syntax errors in arrival order.
///
/// # Examples
///
/// ```
/// use cuke_ast::{CollectDiagnostics, DiagnosticSink, SyntaxError};
///
/// let mut sink = CollectDiagnostics::default();
/// sink.syntax_error(SyntaxError {
///     parser_state: "feature".into(),
///     offending_event: "step".into(),
///     legal_events: vec!["scenario".into()],
///     line: 3,
/// });
/// assert_eq!(sink.errors().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectDiagnostics {
    errors: Vec<SyntaxError>,
}

impl CollectDiagnostics {
    /// Errors received so far.
    #[must_use]
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Consume the sink, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }
}

impl DiagnosticSink for CollectDiagnostics {
    fn syntax_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }
}

impl<F> DiagnosticSink for F
where
    F: FnMut(SyntaxError),
{
    fn syntax_error(&mut self, error: SyntaxError) {
        self(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(line: usize) -> SyntaxError {
        SyntaxError {
            parser_state: "scenario".into(),
            offending_event: "feature".into(),
            legal_events: vec!["step".into(), "examples".into()],
            line,
        }
    }

    #[test]
    fn collector_keeps_arrival_order() {
        let mut sink = CollectDiagnostics::default();
        sink.syntax_error(error(4));
        sink.syntax_error(error(2));
        let lines: Vec<_> = sink.into_errors().into_iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![4, 2]);
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |e: SyntaxError| seen.push(e.line);
            sink.syntax_error(error(9));
        }
        assert_eq!(seen, vec![9]);
    }

    #[test]
    fn display_names_every_field() {
        let text = error(7).to_string();
        assert_eq!(
            text,
            "line 7: unexpected feature in state scenario, expected one of: step, examples"
        );
    }
}
