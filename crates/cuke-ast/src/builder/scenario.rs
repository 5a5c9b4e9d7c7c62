//! Scenario and scenario outline builders.

use std::sync::Arc;

use super::{Annotated, ExamplesTableBuilder, StepBuilder};
use crate::node::{Background, ExamplesTable, Scenario, ScenarioOutline};
use crate::value::{Language, Tags};

#[derive(Clone, Debug)]
pub(crate) struct ScenarioBuilder {
    context: Annotated,
    steps: Vec<StepBuilder>,
}

impl ScenarioBuilder {
    pub(crate) fn new(context: Annotated) -> Self {
        Self {
            context,
            steps: Vec::new(),
        }
    }

    pub(crate) fn add_step(&mut self, step: StepBuilder) {
        self.steps.push(step);
    }

    pub(crate) fn result(
        &self,
        background: &Arc<Background>,
        language: &Language,
        feature_tags: &Tags,
    ) -> Scenario {
        let steps = self
            .steps
            .iter()
            .map(|step| step.concrete(language))
            .collect();
        Scenario::new(
            self.context.head(),
            language.clone(),
            Arc::clone(background),
            self.context.tags(),
            feature_tags.clone(),
            steps,
        )
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ScenarioOutlineBuilder {
    context: Annotated,
    steps: Vec<StepBuilder>,
    examples_tables: Vec<ExamplesTable>,
}

impl ScenarioOutlineBuilder {
    pub(crate) fn new(context: Annotated) -> Self {
        Self {
            context,
            steps: Vec::new(),
            examples_tables: Vec::new(),
        }
    }

    pub(crate) fn add_step(&mut self, step: StepBuilder) {
        self.steps.push(step);
    }

    /// Examples need no language, so they are finalised on arrival.
    pub(crate) fn add_examples(&mut self, examples: &ExamplesTableBuilder) {
        self.examples_tables.push(examples.result());
    }

    pub(crate) fn result(
        &self,
        background: &Arc<Background>,
        language: &Language,
        feature_tags: &Tags,
    ) -> ScenarioOutline {
        let steps = self
            .steps
            .iter()
            .map(|step| step.outline(language))
            .collect();
        ScenarioOutline::new(
            self.context.head(),
            language.clone(),
            Arc::clone(background),
            self.context.tags(),
            feature_tags.clone(),
            steps,
            self.examples_tables.clone(),
        )
    }
}
