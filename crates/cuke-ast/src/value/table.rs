//! Examples table header and data rows.

use std::borrow::Cow;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::Location;
use crate::placeholder::ColumnPattern;

/// Column names of an Examples table, taken from its first row.
///
/// Column names are expected to be unique; when a name repeats, lookups
/// resolve to its first column. Any cell text is a valid column name,
/// including the empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Header {
    cells: Vec<String>,
    location: Location,
    #[cfg_attr(feature = "serde", serde(skip))]
    pattern: Arc<ColumnPattern>,
}

impl Header {
    /// Create a header from its cells.
    #[must_use]
    pub fn new<I, S>(cells: I, location: Location) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        let pattern = Arc::new(ColumnPattern::new(cells.iter().map(String::as_str)));
        Self {
            cells,
            location,
            pattern,
        }
    }

    /// Column names in order.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Location of the header line.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Pair a data line's cells with the column names.
    ///
    /// Cells beyond the number of columns are ignored. Columns with no cell
    /// stay unset, so their `<column>` tokens are kept literally rather than
    /// expanding to empty text. The parser never produces ragged tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuke_ast::{Header, Location};
    ///
    /// let header = Header::new(["a", "b"], Location::new("t.feature", 5));
    /// let row = header.build_row(["1", "2"], Location::new("t.feature", 6));
    /// assert_eq!(row.get("b"), Some("2"));
    /// ```
    #[must_use]
    pub fn build_row<I, S>(&self, cells: I, location: Location) -> Row
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = cells.into_iter().map(Into::into).collect();
        if values.len() != self.cells.len() {
            log::warn!(
                "examples row at {location} has {} cells but the header has {}",
                values.len(),
                self.cells.len()
            );
        }
        let data = self.cells.iter().cloned().zip(values).collect();
        Row {
            data,
            location,
            pattern: Arc::clone(&self.pattern),
        }
    }

    /// Expand `text` against `row`; see [`Row::expand`].
    #[must_use]
    pub fn expand(&self, row: &Row, text: &str) -> String {
        row.expand(text).into_owned()
    }
}

/// One data line of an Examples table, keyed by column name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Row {
    data: Vec<(String, String)>,
    location: Location,
    #[cfg_attr(feature = "serde", serde(skip))]
    pattern: Arc<ColumnPattern>,
}

impl Row {
    /// Location of the data line.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Value in the named column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value.as_str())
    }

    /// Cell values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|(_, value)| value.as_str())
    }

    /// `(column, value)` pairs in column order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Replace each `<column>` token in `text` with this row's value.
    ///
    /// Every header column is matched literally, so names that are empty
    /// or contain `<` and `>` substitute too. Tokens naming a column this row
    /// does not have are kept as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuke_ast::{Header, Location};
    ///
    /// let header = Header::new(["a", "b"], Location::new("t.feature", 5));
    /// let row = header.build_row(["1", "2"], Location::new("t.feature", 6));
    /// assert_eq!(row.expand("use <a> and <b>"), "use 1 and 2");
    /// assert_eq!(row.expand("<c>"), "<c>");
    /// ```
    #[must_use]
    pub fn expand<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.substitute(text, |column| self.get(column))
    }
}
