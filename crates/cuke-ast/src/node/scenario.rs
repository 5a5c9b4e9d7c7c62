//! Scenarios and scenario outlines.

use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Background, ExamplesTable, NodeHead, OutlineStep, Step};
use crate::value::{Language, Row, Tags};

/// Feature tags first, then own tags, without repeats.
fn union_names<'a>(feature_tags: &'a Tags, tags: &'a Tags) -> impl Iterator<Item = &'a str> {
    let mut seen = HashSet::new();
    feature_tags
        .names()
        .chain(tags.names())
        .filter(move |name| seen.insert(*name))
}

/// A directly executable sequence of steps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scenario {
    head: NodeHead,
    language: Language,
    background: Arc<Background>,
    tags: Tags,
    feature_tags: Tags,
    steps: Vec<Step>,
}

impl Scenario {
    pub(crate) fn new(
        head: NodeHead,
        language: Language,
        background: Arc<Background>,
        tags: Tags,
        feature_tags: Tags,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            head,
            language,
            background,
            tags,
            feature_tags,
            steps,
        }
    }

    head_accessors!();

    /// Dialect the scenario was written in.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The feature's background, shared with sibling scenarios.
    #[must_use]
    pub fn background(&self) -> &Arc<Background> {
        &self.background
    }

    /// Tags written on the scenario itself.
    #[must_use]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Tags written on the enclosing feature.
    #[must_use]
    pub fn feature_tags(&self) -> &Tags {
        &self.feature_tags
    }

    /// Feature tags followed by the scenario's own, without repeats.
    ///
    /// Computed on each call; the two sets stay separate on the node.
    pub fn all_tag_names(&self) -> impl Iterator<Item = &str> {
        union_names(&self.feature_tags, &self.tags)
    }

    /// Steps in source order, excluding background steps.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// A scenario template with Examples tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScenarioOutline {
    head: NodeHead,
    language: Language,
    background: Arc<Background>,
    tags: Tags,
    feature_tags: Tags,
    steps: Vec<OutlineStep>,
    examples_tables: Vec<ExamplesTable>,
}

impl ScenarioOutline {
    pub(crate) fn new(
        head: NodeHead,
        language: Language,
        background: Arc<Background>,
        tags: Tags,
        feature_tags: Tags,
        steps: Vec<OutlineStep>,
        examples_tables: Vec<ExamplesTable>,
    ) -> Self {
        Self {
            head,
            language,
            background,
            tags,
            feature_tags,
            steps,
            examples_tables,
        }
    }

    head_accessors!();

    /// Dialect the outline was written in.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The feature's background, shared with sibling scenarios.
    #[must_use]
    pub fn background(&self) -> &Arc<Background> {
        &self.background
    }

    /// Tags written on the outline itself.
    #[must_use]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Tags written on the enclosing feature.
    #[must_use]
    pub fn feature_tags(&self) -> &Tags {
        &self.feature_tags
    }

    /// Feature tags followed by the outline's own, without repeats.
    pub fn all_tag_names(&self) -> impl Iterator<Item = &str> {
        union_names(&self.feature_tags, &self.tags)
    }

    /// Step templates in source order.
    #[must_use]
    pub fn steps(&self) -> &[OutlineStep] {
        &self.steps
    }

    /// Examples tables in source order.
    #[must_use]
    pub fn examples_tables(&self) -> &[ExamplesTable] {
        &self.examples_tables
    }

    /// Expand every template against every row, tables first then rows.
    ///
    /// Nothing is cached: each call builds fresh steps.
    pub fn expansions(&self) -> impl Iterator<Item = Expansion<'_>> {
        self.examples_tables.iter().flat_map(move |table| {
            table.rows().iter().map(move |row| Expansion {
                table,
                row,
                steps: self.steps.iter().map(|step| step.to_step(row)).collect(),
            })
        })
    }
}

/// Concrete steps generated for one Examples row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion<'a> {
    /// Table the row belongs to.
    pub table: &'a ExamplesTable,
    /// The driving row.
    pub row: &'a Row,
    /// One step per outline template, in template order.
    pub steps: Vec<Step>,
}
