//! Structural traversal of a finished feature tree.
//!
//! [`Visitor`] has one method per node kind. The default methods descend into
//! children through the matching `walk_*` function, so an implementor
//! overrides only the kinds it cares about and calls `walk_*` itself when it
//! still wants the children visited.

use std::fmt;

use crate::node::{
    Background, ExamplesTable, Feature, FeatureChild, OutlineStep, Scenario, ScenarioOutline,
    Step,
};
use crate::value::{DataTable, DocString, MultilineArgument, Row};

/// The kind of node a [`DescribeTo`] implementor reports itself as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Feature`].
    Feature,
    /// [`Background`], declared or empty.
    Background,
    /// [`Scenario`].
    Scenario,
    /// [`ScenarioOutline`].
    ScenarioOutline,
    /// [`Step`].
    Step,
    /// [`OutlineStep`].
    OutlineStep,
    /// [`ExamplesTable`].
    ExamplesTable,
    /// [`Row`] of an Examples table.
    ExamplesTableRow,
    /// [`DocString`].
    DocString,
    /// [`DataTable`].
    DataTable,
}

impl NodeKind {
    /// Snake-case name of the kind, e.g. `scenario_outline`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Background => "background",
            Self::Scenario => "scenario",
            Self::ScenarioOutline => "scenario_outline",
            Self::Step => "step",
            Self::OutlineStep => "outline_step",
            Self::ExamplesTable => "examples_table",
            Self::ExamplesTableRow => "examples_table_row",
            Self::DocString => "doc_string",
            Self::DataTable => "data_table",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives the nodes of a feature tree.
///
/// # Examples
///
/// ```
/// use cuke_ast::{AstBuilder, DescribeTo, EventListener, NodeRecord, Step, Visitor};
///
/// #[derive(Default)]
/// struct StepNames(Vec<String>);
///
/// impl<'ast> Visitor<'ast> for StepNames {
///     fn visit_step(&mut self, step: &'ast Step) {
///         self.0.push(step.name().to_owned());
///     }
/// }
///
/// let mut listener = AstBuilder::default();
/// listener.set_language("en");
/// listener.open_feature(NodeRecord::new("Feature", "demo", 1));
/// listener.open_scenario(NodeRecord::new("Scenario", "s", 2));
/// listener.add_step(NodeRecord::new("Given ", "a step", 3));
/// let feature = listener.result().expect("language is set").expect("feature is open");
///
/// let mut names = StepNames::default();
/// feature.describe_to(&mut names);
/// assert_eq!(names.0, vec!["a step"]);
/// ```
pub trait Visitor<'ast> {
    /// Visit the feature root.
    fn visit_feature(&mut self, feature: &'ast Feature) {
        walk_feature(self, feature);
    }

    /// Visit the background. The empty background is visited too.
    fn visit_background(&mut self, background: &'ast Background) {
        walk_background(self, background);
    }

    /// Visit a concrete scenario.
    fn visit_scenario(&mut self, scenario: &'ast Scenario) {
        walk_scenario(self, scenario);
    }

    /// Visit a scenario outline.
    fn visit_scenario_outline(&mut self, outline: &'ast ScenarioOutline) {
        walk_scenario_outline(self, outline);
    }

    /// Visit a concrete step.
    fn visit_step(&mut self, step: &'ast Step) {
        walk_step(self, step);
    }

    /// Visit a step template.
    fn visit_outline_step(&mut self, step: &'ast OutlineStep) {
        walk_outline_step(self, step);
    }

    /// Visit an Examples table.
    fn visit_examples_table(&mut self, table: &'ast ExamplesTable) {
        walk_examples_table(self, table);
    }

    /// Visit one data row of an Examples table.
    fn visit_examples_table_row(&mut self, _row: &'ast Row) {}

    /// Visit a step's doc string.
    fn visit_doc_string(&mut self, _doc_string: &'ast DocString) {}

    /// Visit a step's data table.
    fn visit_data_table(&mut self, _data_table: &'ast DataTable) {}
}

/// Visit the background, then every child in document order.
pub fn walk_feature<'ast, V>(visitor: &mut V, feature: &'ast Feature)
where
    V: Visitor<'ast> + ?Sized,
{
    visitor.visit_background(feature.background());
    for child in feature.children() {
        match child {
            FeatureChild::Scenario(scenario) => visitor.visit_scenario(scenario),
            FeatureChild::ScenarioOutline(outline) => visitor.visit_scenario_outline(outline),
        }
    }
}

/// Visit the background's steps.
pub fn walk_background<'ast, V>(visitor: &mut V, background: &'ast Background)
where
    V: Visitor<'ast> + ?Sized,
{
    for step in background.steps() {
        visitor.visit_step(step);
    }
}

/// Visit the scenario's own steps.
pub fn walk_scenario<'ast, V>(visitor: &mut V, scenario: &'ast Scenario)
where
    V: Visitor<'ast> + ?Sized,
{
    for step in scenario.steps() {
        visitor.visit_step(step);
    }
}

/// Visit the templates, then the Examples tables.
pub fn walk_scenario_outline<'ast, V>(visitor: &mut V, outline: &'ast ScenarioOutline)
where
    V: Visitor<'ast> + ?Sized,
{
    for step in outline.steps() {
        visitor.visit_outline_step(step);
    }
    for table in outline.examples_tables() {
        visitor.visit_examples_table(table);
    }
}

/// Visit the table's data rows.
pub fn walk_examples_table<'ast, V>(visitor: &mut V, table: &'ast ExamplesTable)
where
    V: Visitor<'ast> + ?Sized,
{
    for row in table.rows() {
        visitor.visit_examples_table_row(row);
    }
}

/// Visit the step's argument, if any.
pub fn walk_step<'ast, V>(visitor: &mut V, step: &'ast Step)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_argument(visitor, step.multiline_argument());
}

/// Visit the template's argument, if any.
pub fn walk_outline_step<'ast, V>(visitor: &mut V, step: &'ast OutlineStep)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_argument(visitor, step.multiline_argument());
}

fn walk_argument<'ast, V>(visitor: &mut V, argument: Option<&'ast MultilineArgument>)
where
    V: Visitor<'ast> + ?Sized,
{
    match argument {
        Some(MultilineArgument::DocString(doc)) => visitor.visit_doc_string(doc),
        Some(MultilineArgument::DataTable(table)) => visitor.visit_data_table(table),
        None => {}
    }
}

/// A node that can describe itself to a [`Visitor`].
pub trait DescribeTo {
    /// What kind of node this is.
    fn kind(&self) -> NodeKind;

    /// Call the visitor method matching [`kind`](Self::kind).
    fn describe_to<'ast, V>(&'ast self, visitor: &mut V)
    where
        V: Visitor<'ast> + ?Sized;
}

macro_rules! describe_to {
    ($node:ty, $kind:ident, $method:ident) => {
        impl DescribeTo for $node {
            fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }

            fn describe_to<'ast, V>(&'ast self, visitor: &mut V)
            where
                V: Visitor<'ast> + ?Sized,
            {
                visitor.$method(self);
            }
        }
    };
}

describe_to!(Feature, Feature, visit_feature);
describe_to!(Background, Background, visit_background);
describe_to!(Scenario, Scenario, visit_scenario);
describe_to!(ScenarioOutline, ScenarioOutline, visit_scenario_outline);
describe_to!(Step, Step, visit_step);
describe_to!(OutlineStep, OutlineStep, visit_outline_step);
describe_to!(ExamplesTable, ExamplesTable, visit_examples_table);
describe_to!(Row, ExamplesTableRow, visit_examples_table_row);
describe_to!(DocString, DocString, visit_doc_string);
describe_to!(DataTable, DataTable, visit_data_table);

impl DescribeTo for FeatureChild {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Scenario(_) => NodeKind::Scenario,
            Self::ScenarioOutline(_) => NodeKind::ScenarioOutline,
        }
    }

    fn describe_to<'ast, V>(&'ast self, visitor: &mut V)
    where
        V: Visitor<'ast> + ?Sized,
    {
        match self {
            Self::Scenario(scenario) => visitor.visit_scenario(scenario),
            Self::ScenarioOutline(outline) => visitor.visit_scenario_outline(outline),
        }
    }
}

impl DescribeTo for MultilineArgument {
    fn kind(&self) -> NodeKind {
        match self {
            Self::DocString(_) => NodeKind::DocString,
            Self::DataTable(_) => NodeKind::DataTable,
        }
    }

    fn describe_to<'ast, V>(&'ast self, visitor: &mut V)
    where
        V: Visitor<'ast> + ?Sized,
    {
        walk_argument(visitor, Some(self));
    }
}
