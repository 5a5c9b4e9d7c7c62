//! Raw node records delivered by the external parser.
//!
//! Every `open_*`/`add_*` event carries one [`NodeRecord`]. The record is the
//! whole contract between a parser adapter and the builders: adapters fill in
//! the fields they know about and leave the rest at their defaults.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A tag as written in the source, e.g. `@wip`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TagRecord {
    /// Tag name, with or without the leading `@`.
    pub name: String,
    /// One-based source line.
    pub line: usize,
}

/// A `#` comment line preceding a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CommentRecord {
    /// Comment text as it appears in the source.
    pub value: String,
    /// One-based source line.
    pub line: usize,
}

/// A doc string attached to a step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DocStringRecord {
    /// Text between the delimiters.
    pub content: String,
    /// Media type written after the opening delimiter, if any.
    pub content_type: Option<String>,
    /// One-based line of the opening delimiter.
    pub line: usize,
}

/// One pipe-delimited table row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RowRecord {
    /// Cell values in column order.
    pub cells: Vec<String>,
    /// One-based source line.
    pub line: usize,
}

impl RowRecord {
    /// Build a row from any iterable of cell values.
    #[must_use]
    pub fn new<I, S>(cells: I, line: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            line,
        }
    }
}

/// Structural record for a feature, background, scenario, outline, examples
/// block, or step.
///
/// A step carries at most one of `doc_string` and `rows`. Examples blocks
/// always use `rows`, with the header as the first entry.
///
/// # Examples
///
/// ```
/// use cuke_ast::{NodeRecord, RowRecord};
///
/// let record = NodeRecord::new("Given ", "a table", 4)
///     .with_rows([RowRecord::new(["a", "b"], 5)]);
/// assert_eq!(record.rows.len(), 1);
/// assert!(record.doc_string.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NodeRecord {
    /// One-based source line of the node keyword.
    pub line: usize,
    /// Tags in source order.
    pub tags: Vec<TagRecord>,
    /// Comments in source order.
    pub comments: Vec<CommentRecord>,
    /// Keyword exactly as written, e.g. `Scenario Outline` or `Given `.
    pub keyword: String,
    /// Text following the keyword.
    pub name: String,
    /// Free-form text below the keyword line.
    pub description: String,
    /// Doc string argument, steps only.
    pub doc_string: Option<DocStringRecord>,
    /// Table rows, for examples blocks and steps with a data table.
    pub rows: Vec<RowRecord>,
}

impl NodeRecord {
    /// Create a record with the mandatory keyword, name and line.
    #[must_use]
    pub fn new(keyword: impl Into<String>, name: impl Into<String>, line: usize) -> Self {
        Self {
            line,
            keyword: keyword.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attach tags given by name; each tag is placed on `line`.
    #[must_use]
    pub fn with_tags<I, S>(mut self, names: I, line: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(names.into_iter().map(|name| TagRecord {
            name: name.into(),
            line,
        }));
        self
    }

    /// Attach comment lines, numbered upwards from `first_line`.
    #[must_use]
    pub fn with_comments<I, S>(mut self, values: I, first_line: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments
            .extend(
                values
                    .into_iter()
                    .zip(first_line..)
                    .map(|(value, line)| CommentRecord {
                        value: value.into(),
                        line,
                    }),
            );
        self
    }

    /// Set the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a doc string argument.
    #[must_use]
    pub fn with_doc_string(mut self, content: impl Into<String>, line: usize) -> Self {
        self.doc_string = Some(DocStringRecord {
            content: content.into(),
            content_type: None,
            line,
        });
        self
    }

    /// Append table rows.
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = RowRecord>) -> Self {
        self.rows.extend(rows);
        self
    }
}
