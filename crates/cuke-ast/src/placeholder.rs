//! `<column>` placeholder handling for scenario outline templates.
//!
//! Expansion is driven by the header: every column name `key` yields a
//! literal `<key>` token, so names that are empty or contain angle brackets
//! still substitute. The scan is a single left-to-right pass, the longest
//! token wins where several start at the same offset, and replacement text
//! is never rescanned. Tokens naming no column are copied through verbatim.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches `<name>` where `name` contains no angle brackets.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([^<>]+)>").unwrap_or_else(|_| unreachable!("placeholder regex is valid"))
});

/// Compiled `<column>` tokens of one Examples header.
///
/// Equality compares the compiled pattern, which is a function of the
/// distinct column names.
#[derive(Clone, Debug, Default)]
pub(crate) struct ColumnPattern {
    regex: Option<Regex>,
}

impl ColumnPattern {
    /// Build the alternation of escaped `<key>` literals, longest first.
    pub(crate) fn new<'k, I>(columns: I) -> Self
    where
        I: IntoIterator<Item = &'k str>,
    {
        let mut keys: Vec<&str> = columns.into_iter().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keys.dedup();
        if keys.is_empty() {
            return Self::default();
        }
        let alternation = keys
            .iter()
            .map(|key| regex::escape(&format!("<{key}>")))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&alternation)
            .inspect_err(|err| log::warn!("examples header cannot be compiled for expansion: {err}"))
            .ok();
        Self { regex }
    }

    /// Replace every `<column>` token in `text`.
    ///
    /// `lookup` returns the value for a column, or `None` to leave the token
    /// as written.
    pub(crate) fn substitute<'t, 'v, F>(&self, text: &'t str, lookup: F) -> Cow<'t, str>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let Some(regex) = &self.regex else {
            return Cow::Borrowed(text);
        };
        regex.replace_all(text, |caps: &Captures<'_>| {
            let token = caps.get(0).map_or("", |m| m.as_str());
            let column = token
                .strip_prefix('<')
                .and_then(|rest| rest.strip_suffix('>'))
                .unwrap_or(token);
            lookup(column).unwrap_or(token).to_owned()
        })
    }
}

impl PartialEq for ColumnPattern {
    fn eq(&self, other: &Self) -> bool {
        self.regex.as_ref().map(Regex::as_str) == other.regex.as_ref().map(Regex::as_str)
    }
}

impl Eq for ColumnPattern {}

/// Returns `true` if `text` contains at least one `<name>` token.
///
/// # Examples
///
/// ```
/// use cuke_ast::contains_placeholders;
///
/// assert!(contains_placeholders("I have <count> items"));
/// assert!(!contains_placeholders("a < b"));
/// ```
#[must_use]
pub fn contains_placeholders(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

/// Placeholder names in `text`, in order of appearance, repeats included.
///
/// # Examples
///
/// ```
/// use cuke_ast::placeholder_names;
///
/// assert_eq!(placeholder_names("<a> then <b> then <a>"), vec!["a", "b", "a"]);
/// ```
#[must_use]
pub fn placeholder_names(text: &str) -> Vec<&str> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
