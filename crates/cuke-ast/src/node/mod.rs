//! Immutable nodes produced by the builders.
//!
//! Nodes are plain data once constructed. The only sharing is the feature's
//! [`Background`], which every scenario references through an `Arc` so the
//! whole tree can be read from several threads without copying it.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::record::NodeRecord;
use crate::value::{Comment, Location};

pub use background::Background;
pub use examples::ExamplesTable;
pub use feature::{Feature, FeatureChild};
pub use scenario::{Expansion, Scenario, ScenarioOutline};
pub use step::{OutlineStep, Step};
pub(crate) use step::StepHead;

/// Keyword line shared by features, backgrounds, scenarios, outlines and
/// examples blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub(crate) struct NodeHead {
    pub(crate) record: Arc<NodeRecord>,
    pub(crate) location: Location,
    pub(crate) comment: Comment,
    pub(crate) keyword: String,
    pub(crate) name: String,
    pub(crate) description: String,
}

/// Generates the accessors every headed node exposes.
macro_rules! head_accessors {
    () => {
        /// The parser record this node was built from.
        #[must_use]
        pub fn source_record(&self) -> &std::sync::Arc<$crate::NodeRecord> {
            &self.head.record
        }

        /// Location of the keyword line.
        #[must_use]
        pub fn location(&self) -> &$crate::Location {
            &self.head.location
        }

        /// Comments written above the node.
        #[must_use]
        pub fn comment(&self) -> &$crate::Comment {
            &self.head.comment
        }

        /// Keyword as written in the source.
        #[must_use]
        pub fn keyword(&self) -> &str {
            &self.head.keyword
        }

        /// Text following the keyword.
        #[must_use]
        pub fn name(&self) -> &str {
            &self.head.name
        }

        /// Free-form description below the keyword line.
        #[must_use]
        pub fn description(&self) -> &str {
            &self.head.description
        }
    };
}

mod background;
mod examples;
mod feature;
mod scenario;
mod step;
