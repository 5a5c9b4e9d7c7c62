//! Tag sets attached to features, scenarios and outlines.
//!
//! Names are normalised to carry a leading `@` and duplicates are dropped so
//! comparisons do not depend on how a parser spelled the tag.

use std::collections::HashSet;

use derive_more::IntoIterator;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::Location;
use crate::record::TagRecord;

/// A single tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Tag {
    name: String,
    location: Location,
}

impl Tag {
    /// Create a tag, adding the `@` prefix when missing.
    #[must_use]
    pub fn new(name: &str, location: Location) -> Self {
        Self {
            name: normalise(name),
            location,
        }
    }

    /// Tag name including the leading `@`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the tag was written.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }
}

fn normalise(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.starts_with('@') {
        trimmed.to_owned()
    } else {
        format!("@{trimmed}")
    }
}

/// Ordered, duplicate-free tags owned by one node.
///
/// # Examples
///
/// ```
/// use cuke_ast::{Location, Tags};
///
/// let owner = Location::new("a.feature", 3);
/// let tags = Tags::from_names(owner, ["wip", "@slow", "@wip"]);
/// assert_eq!(tags.names().collect::<Vec<_>>(), vec!["@wip", "@slow"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, IntoIterator)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Tags {
    location: Location,
    #[into_iterator(owned, ref)]
    tags: Vec<Tag>,
}

impl Tags {
    /// Collect tags for the node at `location`, keeping first occurrences.
    #[must_use]
    pub fn new(location: Location, tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .filter(|tag| seen.insert(tag.name.clone()))
            .collect();
        Self { location, tags }
    }

    /// Convenience constructor placing every tag on the owner's line.
    #[must_use]
    pub fn from_names<I, S>(location: Location, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: Vec<Tag> = names
            .into_iter()
            .map(|name| Tag::new(name.as_ref(), location.clone()))
            .collect();
        Self::new(location, tags)
    }

    pub(crate) fn from_records(location: Location, records: &[TagRecord]) -> Self {
        let tags: Vec<Tag> = records
            .iter()
            .map(|record| Tag::new(&record.name, location.on_line(record.line)))
            .collect();
        Self::new(location, tags)
    }

    /// Location of the node owning these tags.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Tag names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(Tag::name)
    }

    /// Iterate the tags.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Whether a tag with `name` is present; the `@` prefix is optional.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let wanted = normalise(name);
        self.tags.iter().any(|tag| tag.name == wanted)
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` when no tags were written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
