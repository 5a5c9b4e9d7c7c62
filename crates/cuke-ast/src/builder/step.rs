//! Step builders for both concrete steps and outline templates.

use std::sync::Arc;

use super::Annotated;
use crate::node::{OutlineStep, Step, StepHead};
use crate::value::{Language, MultilineArgument};

/// Accumulates nothing beyond its record; exists so every container builds
/// its steps at finalisation time with the resolved language.
#[derive(Clone, Debug)]
pub(crate) struct StepBuilder {
    context: Annotated,
}

impl StepBuilder {
    pub(crate) fn new(context: Annotated) -> Self {
        Self { context }
    }

    fn argument(&self) -> Option<MultilineArgument> {
        MultilineArgument::from_record(self.context.record(), &self.context.location())
    }

    fn head(&self, language: &Language) -> StepHead {
        let record = self.context.record();
        StepHead {
            record: Arc::clone(record),
            language: language.clone(),
            location: self.context.location(),
            keyword: record.keyword.clone(),
            name: record.name.clone(),
            argument: self.argument(),
        }
    }

    pub(crate) fn concrete(&self, language: &Language) -> Step {
        Step::new(self.head(language))
    }

    pub(crate) fn outline(&self, language: &Language) -> OutlineStep {
        OutlineStep::new(self.head(language))
    }
}
