//! Comment text and language tags.

use std::fmt;

use derive_more::{Deref, From};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Comment lines attached to a node, joined by `\n` in source order.
///
/// A node without comments carries an empty `Comment` rather than `None`.
///
/// # Examples
///
/// ```
/// use cuke_ast::Comment;
///
/// let comment = Comment::from_lines(["# first", "# second"]);
/// assert_eq!(comment.as_str(), "# first\n# second");
/// assert!(Comment::default().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deref)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Comment(String);

impl Comment {
    /// Join comment lines with newlines, keeping their order.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (idx, line) in lines.into_iter().enumerate() {
            if idx > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self(text)
    }

    /// The joined comment text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the original comment lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n').filter(|_| !self.0.is_empty())
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gherkin dialect code the document was written in, e.g. `en` or `fr`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deref, From)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Language(String);

impl Language {
    /// Create a language tag from its code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The dialect code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
