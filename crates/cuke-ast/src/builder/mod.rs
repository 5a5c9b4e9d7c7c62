//! Mutable accumulators, one per node kind.
//!
//! Each builder owns the parser record it was opened with plus the file path
//! in effect at that moment. Derived values (location, tags, comment) come
//! from the shared [`Annotated`] context rather than being stored twice.

mod background;
mod examples;
mod feature;
mod scenario;
mod step;

use std::sync::Arc;

use crate::node::NodeHead;
use crate::record::NodeRecord;
use crate::value::{Comment, Location, Tags};

pub(crate) use background::BackgroundBuilder;
pub(crate) use examples::ExamplesTableBuilder;
pub(crate) use feature::{ChildBuilder, FeatureBuilder};
pub(crate) use scenario::{ScenarioBuilder, ScenarioOutlineBuilder};
pub(crate) use step::StepBuilder;

/// A parser record together with the file it was read from.
#[derive(Clone, Debug)]
pub(crate) struct Annotated {
    file: String,
    record: Arc<NodeRecord>,
}

impl Annotated {
    pub(crate) fn new(file: &str, record: NodeRecord) -> Self {
        Self {
            file: file.to_owned(),
            record: Arc::new(record),
        }
    }

    pub(crate) fn record(&self) -> &Arc<NodeRecord> {
        &self.record
    }

    pub(crate) fn location(&self) -> Location {
        Location::new(self.file.as_str(), self.record.line)
    }

    pub(crate) fn tags(&self) -> Tags {
        Tags::from_records(self.location(), &self.record.tags)
    }

    pub(crate) fn comment(&self) -> Comment {
        Comment::from_lines(self.record.comments.iter().map(|comment| &comment.value))
    }

    /// Keyword line with name and description taken verbatim.
    pub(crate) fn head(&self) -> NodeHead {
        NodeHead {
            record: Arc::clone(&self.record),
            location: self.location(),
            comment: self.comment(),
            keyword: self.record.keyword.clone(),
            name: self.record.name.clone(),
            description: self.record.description.clone(),
        }
    }

    /// Keyword line with leading space stripped from the name and trailing
    /// space stripped from the description.
    pub(crate) fn trimmed_head(&self) -> NodeHead {
        NodeHead {
            name: self.record.name.trim_start().to_owned(),
            description: self.record.description.trim_end().to_owned(),
            ..self.head()
        }
    }
}
