//! Examples tables of scenario outlines.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::NodeHead;
use crate::value::{Header, Row};

/// A header plus the data rows that drive outline expansion.
///
/// A table may have no data rows; it then contributes no expansions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExamplesTable {
    head: NodeHead,
    header: Header,
    rows: Vec<Row>,
}

impl ExamplesTable {
    pub(crate) fn new(head: NodeHead, header: Header, rows: Vec<Row>) -> Self {
        Self { head, header, rows }
    }

    head_accessors!();

    /// Column names.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Data rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}
