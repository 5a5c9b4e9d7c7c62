//! Concrete steps and outline step templates.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::record::NodeRecord;
use crate::value::{Language, Location, MultilineArgument, Row};

/// Fields shared by concrete steps and outline templates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub(crate) struct StepHead {
    pub(crate) record: Arc<NodeRecord>,
    pub(crate) language: Language,
    pub(crate) location: Location,
    pub(crate) keyword: String,
    pub(crate) name: String,
    pub(crate) argument: Option<MultilineArgument>,
}

/// Generates the accessors both step flavours expose.
macro_rules! step_accessors {
    () => {
        pub(crate) fn new(head: StepHead) -> Self {
            Self { head }
        }

        /// The parser record this step was built from. Steps produced by
        /// [`OutlineStep::to_step`] keep their template's record.
        #[must_use]
        pub fn source_record(&self) -> &Arc<NodeRecord> {
            &self.head.record
        }

        /// Dialect the step was written in.
        #[must_use]
        pub fn language(&self) -> &Language {
            &self.head.language
        }

        /// Location of the step line, or of the Examples row for expanded
        /// steps.
        #[must_use]
        pub fn location(&self) -> &Location {
            &self.head.location
        }

        /// Keyword as written, including trailing whitespace, e.g. `Given `.
        #[must_use]
        pub fn keyword(&self) -> &str {
            &self.head.keyword
        }

        /// Step text after the keyword; on templates it may hold `<column>`
        /// tokens.
        #[must_use]
        pub fn name(&self) -> &str {
            &self.head.name
        }

        /// Attached doc string or data table.
        #[must_use]
        pub fn multiline_argument(&self) -> Option<&MultilineArgument> {
            self.head.argument.as_ref()
        }
    };
}

/// One executable step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Step {
    head: StepHead,
}

impl Step {
    step_accessors!();
}

/// A step template inside a scenario outline.
///
/// Outline steps are never executed directly; [`to_step`](Self::to_step)
/// produces the concrete step for one Examples row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct OutlineStep {
    head: StepHead,
}

impl OutlineStep {
    step_accessors!();

    /// Produce the concrete step for one Examples row.
    ///
    /// The result is located at the row, its text and every argument cell
    /// are expanded against the row, and keyword and language are copied.
    /// Tokens naming unknown columns are left as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuke_ast::{AstBuilder, EventListener, NodeRecord, RowRecord};
    ///
    /// let mut builder = AstBuilder::default();
    /// builder.set_language("en");
    /// builder.open_feature(NodeRecord::new("Feature", "Sums", 1));
    /// builder.open_scenario_outline(NodeRecord::new("Scenario Outline", "add", 2));
    /// builder.add_step(NodeRecord::new("When ", "I add <a> and <b>", 3));
    /// builder.add_examples(NodeRecord::new("Examples", "", 4).with_rows([
    ///     RowRecord::new(["a", "b"], 5),
    ///     RowRecord::new(["1", "2"], 6),
    /// ]));
    /// let feature = builder
    ///     .result()
    ///     .expect("language was set")
    ///     .expect("a feature was opened");
    /// let outline = feature.children()[0]
    ///     .as_scenario_outline()
    ///     .expect("first child is an outline");
    /// let row = &outline.examples_tables()[0].rows()[0];
    /// let step = outline.steps()[0].to_step(row);
    /// assert_eq!(step.name(), "I add 1 and 2");
    /// assert_eq!(step.location().line(), 6);
    /// ```
    #[must_use]
    pub fn to_step(&self, row: &Row) -> Step {
        let head = &self.head;
        Step::new(StepHead {
            record: Arc::clone(&head.record),
            language: head.language.clone(),
            location: row.location().clone(),
            keyword: head.keyword.clone(),
            name: row.expand(&head.name).into_owned(),
            argument: head
                .argument
                .as_ref()
                .map(|argument| argument.map_cells(|cell| row.expand(cell).into_owned())),
        })
    }
}
