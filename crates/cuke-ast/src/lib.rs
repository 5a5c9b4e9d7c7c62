//! Feature tree construction for Gherkin documents.
//!
//! An external parser drives an [`EventListener`] with one call per
//! structural element it encounters. [`AstBuilder`] routes those calls to a
//! builder per node kind and, once the document is complete, hands back an
//! immutable [`Feature`]. Scenario outlines keep their steps as templates;
//! [`OutlineStep::to_step`] turns a template and one Examples row into a
//! concrete [`Step`] on demand.
//!
//! The [`replay`] module adapts documents parsed by the `gherkin` crate to the
//! event protocol.

mod builder;
mod config;
mod diagnostics;
mod errors;
mod listener;
mod node;
mod placeholder;
mod record;
pub mod replay;
mod value;
mod visit;

pub use config::{ConfigError, ListenerConfig, PathStyle};
pub use diagnostics::{CollectDiagnostics, DiagnosticSink, IgnoreDiagnostics, SyntaxError};
pub use errors::{BuildError, ReplayError};
pub use listener::{AstBuilder, EventListener};
pub use node::{
    Background, ExamplesTable, Expansion, Feature, FeatureChild, OutlineStep, Scenario,
    ScenarioOutline, Step,
};
pub use placeholder::{contains_placeholders, placeholder_names};
pub use record::{CommentRecord, DocStringRecord, NodeRecord, RowRecord, TagRecord};
pub use value::{
    Comment, DataTable, DocString, Header, Language, Location, MultilineArgument, Row, Tag, Tags,
};
pub use visit::{
    DescribeTo, NodeKind, Visitor, walk_background, walk_examples_table, walk_feature,
    walk_outline_step, walk_scenario, walk_scenario_outline, walk_step,
};
