//! Shared setup steps.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{NodeHead, Step};
use crate::record::NodeRecord;
use crate::value::{Comment, Language, Location};

/// Steps run before every scenario of a feature.
///
/// A feature that declares no background still owns one: the empty
/// background has no steps and no keyword line, so consumers can iterate
/// `background().steps()` without checking for absence.
///
/// # Examples
///
/// ```
/// use cuke_ast::{Background, Language};
///
/// let background = Background::empty(Language::from("en"));
/// assert!(background.is_empty_background());
/// assert!(background.steps().is_empty());
/// assert_eq!(background.keyword(), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Background {
    head: Option<NodeHead>,
    language: Language,
    steps: Vec<Step>,
}

impl Background {
    pub(crate) fn declared(head: NodeHead, language: Language, steps: Vec<Step>) -> Self {
        Self {
            head: Some(head),
            language,
            steps,
        }
    }

    /// The background of a feature that declared none.
    #[must_use]
    pub fn empty(language: Language) -> Self {
        Self {
            head: None,
            language,
            steps: Vec::new(),
        }
    }

    /// Returns `true` for the stand-in of an undeclared background.
    ///
    /// A declared background without steps returns `false`.
    #[must_use]
    pub fn is_empty_background(&self) -> bool {
        self.head.is_none()
    }

    /// Dialect the background was written in.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The parser record, absent for the empty background.
    #[must_use]
    pub fn source_record(&self) -> Option<&Arc<NodeRecord>> {
        self.head.as_ref().map(|head| &head.record)
    }

    /// Location of the keyword line, absent for the empty background.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.head.as_ref().map(|head| &head.location)
    }

    /// Comments written above the keyword; empty for the empty background.
    #[must_use]
    pub fn comment(&self) -> Comment {
        self.head
            .as_ref()
            .map(|head| head.comment.clone())
            .unwrap_or_default()
    }

    /// Keyword as written; empty for the empty background.
    #[must_use]
    pub fn keyword(&self) -> &str {
        self.head.as_ref().map_or("", |head| head.keyword.as_str())
    }

    /// Text following the keyword; empty for the empty background.
    #[must_use]
    pub fn name(&self) -> &str {
        self.head.as_ref().map_or("", |head| head.name.as_str())
    }

    /// Description below the keyword line; empty for the empty background.
    #[must_use]
    pub fn description(&self) -> &str {
        self.head.as_ref().map_or("", |head| head.description.as_str())
    }
}
