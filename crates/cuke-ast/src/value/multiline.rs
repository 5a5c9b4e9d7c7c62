//! Doc strings and data tables attached to steps.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::Location;
use crate::record::NodeRecord;

/// A delimited block of free text following a step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DocString {
    content: String,
    content_type: Option<String>,
    location: Location,
}

impl DocString {
    /// Create a doc string.
    #[must_use]
    pub fn new(content: impl Into<String>, content_type: Option<String>, location: Location) -> Self {
        Self {
            content: content.into(),
            content_type,
            location,
        }
    }

    /// Text between the delimiters.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Media type hint, e.g. `json`.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Location of the opening delimiter.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }
}

/// A pipe-delimited table following a step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DataTable {
    rows: Vec<Vec<String>>,
    location: Location,
}

impl DataTable {
    /// Create a data table from rows of cells.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>, location: Location) -> Self {
        Self { rows, location }
    }

    /// All rows, including any header row.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Location of the first row.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Iterate every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// The optional argument of a step. A step without one holds `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MultilineArgument {
    /// Free text block.
    DocString(DocString),
    /// Table of cells.
    DataTable(DataTable),
}

impl MultilineArgument {
    /// Build the argument a step record carries, preferring the doc string.
    pub(crate) fn from_record(record: &NodeRecord, location: &Location) -> Option<Self> {
        if let Some(doc) = &record.doc_string {
            return Some(Self::DocString(DocString::new(
                doc.content.clone(),
                doc.content_type.clone(),
                location.on_line(doc.line),
            )));
        }
        let first = record.rows.first()?;
        let rows = record.rows.iter().map(|row| row.cells.clone()).collect();
        Some(Self::DataTable(DataTable::new(rows, location.on_line(first.line))))
    }

    /// Apply `f` to the doc string text, or to every table cell on its own.
    ///
    /// The location and content type are kept; only text changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuke_ast::{DataTable, Location, MultilineArgument};
    ///
    /// let table = MultilineArgument::DataTable(DataTable::new(
    ///     vec![vec!["a".into(), "b".into()]],
    ///     Location::new("t.feature", 3),
    /// ));
    /// let upper = table.map_cells(|cell| cell.to_uppercase());
    /// let MultilineArgument::DataTable(upper) = upper else { unreachable!() };
    /// assert_eq!(upper.rows(), &[vec!["A".to_string(), "B".to_string()]]);
    /// ```
    #[must_use]
    pub fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        match self {
            Self::DocString(doc) => Self::DocString(DocString {
                content: f(&doc.content),
                content_type: doc.content_type.clone(),
                location: doc.location.clone(),
            }),
            Self::DataTable(table) => Self::DataTable(DataTable {
                rows: table
                    .rows
                    .iter()
                    .map(|row| row.iter().map(|cell| f(cell)).collect())
                    .collect(),
                location: table.location.clone(),
            }),
        }
    }

    /// The doc string, if this argument is one.
    #[must_use]
    pub fn as_doc_string(&self) -> Option<&DocString> {
        match self {
            Self::DocString(doc) => Some(doc),
            Self::DataTable(_) => None,
        }
    }

    /// The data table, if this argument is one.
    #[must_use]
    pub fn as_data_table(&self) -> Option<&DataTable> {
        match self {
            Self::DataTable(table) => Some(table),
            Self::DocString(_) => None,
        }
    }

    /// Location of the argument's first line.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::DocString(doc) => doc.location(),
            Self::DataTable(table) => table.location(),
        }
    }
}
