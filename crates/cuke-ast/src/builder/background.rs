//! Background builder.

use super::{Annotated, StepBuilder};
use crate::node::Background;
use crate::value::Language;

#[derive(Clone, Debug)]
pub(crate) struct BackgroundBuilder {
    context: Annotated,
    steps: Vec<StepBuilder>,
}

impl BackgroundBuilder {
    pub(crate) fn new(context: Annotated) -> Self {
        Self {
            context,
            steps: Vec::new(),
        }
    }

    pub(crate) fn add_step(&mut self, step: StepBuilder) {
        self.steps.push(step);
    }

    pub(crate) fn result(&self, language: &Language) -> Background {
        let steps = self
            .steps
            .iter()
            .map(|step| step.concrete(language))
            .collect();
        Background::declared(self.context.head(), language.clone(), steps)
    }
}
