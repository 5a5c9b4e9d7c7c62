//! Source locations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A file and one-based line number.
///
/// # Examples
///
/// ```
/// use cuke_ast::Location;
///
/// let location = Location::new("features/cart.feature", 12);
/// assert_eq!(location.to_string(), "features/cart.feature:12");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Location {
    file: String,
    line: usize,
}

impl Location {
    /// Create a location.
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The same file on another line.
    #[must_use]
    pub fn on_line(&self, line: usize) -> Self {
        Self {
            file: self.file.clone(),
            line,
        }
    }

    /// Path of the source file, already normalised by the listener.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// One-based line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_line_keeps_file() {
        let location = Location::new("a.feature", 1).on_line(9);
        assert_eq!(location.file(), "a.feature");
        assert_eq!(location.line(), 9);
    }

    #[test]
    fn orders_by_file_then_line() {
        let mut locations = vec![
            Location::new("b.feature", 1),
            Location::new("a.feature", 7),
            Location::new("a.feature", 2),
        ];
        locations.sort();
        let rendered: Vec<_> = locations.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["a.feature:2", "a.feature:7", "b.feature:1"]);
    }
}
