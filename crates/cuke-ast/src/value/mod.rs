//! Immutable value types shared by every node in the tree.

mod comment;
mod location;
mod multiline;
mod table;
mod tags;

pub use comment::{Comment, Language};
pub use location::Location;
pub use multiline::{DataTable, DocString, MultilineArgument};
pub use table::{Header, Row};
pub use tags::{Tag, Tags};
