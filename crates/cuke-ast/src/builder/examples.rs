//! Examples table builder.

use super::Annotated;
use crate::node::ExamplesTable;
use crate::value::Header;

#[derive(Clone, Debug)]
pub(crate) struct ExamplesTableBuilder {
    context: Annotated,
}

impl ExamplesTableBuilder {
    pub(crate) fn new(context: Annotated) -> Self {
        Self { context }
    }

    /// The first record row is the header, every later row is data.
    ///
    /// A record without rows yields an empty header and no data.
    pub(crate) fn result(&self) -> ExamplesTable {
        let location = self.context.location();
        let mut rows = self.context.record().rows.iter();
        let header = match rows.next() {
            Some(first) => Header::new(first.cells.iter().cloned(), location.on_line(first.line)),
            None => {
                log::warn!("examples at {location} have no header row");
                Header::new(Vec::<String>::new(), location.clone())
            }
        };
        let data = rows
            .map(|row| header.build_row(row.cells.iter().cloned(), location.on_line(row.line)))
            .collect();
        ExamplesTable::new(self.context.head(), header, data)
    }
}
