//! The root node of a document.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Background, NodeHead, Scenario, ScenarioOutline};
use crate::value::{Language, Location, Tags};

/// A scenario or a scenario outline, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FeatureChild {
    /// A concrete scenario.
    Scenario(Scenario),
    /// A scenario template with Examples.
    ScenarioOutline(ScenarioOutline),
}

impl FeatureChild {
    /// The scenario, if this child is one.
    #[must_use]
    pub fn as_scenario(&self) -> Option<&Scenario> {
        match self {
            Self::Scenario(scenario) => Some(scenario),
            Self::ScenarioOutline(_) => None,
        }
    }

    /// The outline, if this child is one.
    #[must_use]
    pub fn as_scenario_outline(&self) -> Option<&ScenarioOutline> {
        match self {
            Self::ScenarioOutline(outline) => Some(outline),
            Self::Scenario(_) => None,
        }
    }

    /// Name of the scenario or outline.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scenario(scenario) => scenario.name(),
            Self::ScenarioOutline(outline) => outline.name(),
        }
    }

    /// Location of the keyword line.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Scenario(scenario) => scenario.location(),
            Self::ScenarioOutline(outline) => outline.location(),
        }
    }

    /// Tags written on the child itself.
    #[must_use]
    pub fn tags(&self) -> &Tags {
        match self {
            Self::Scenario(scenario) => scenario.tags(),
            Self::ScenarioOutline(outline) => outline.tags(),
        }
    }
}

impl From<Scenario> for FeatureChild {
    fn from(scenario: Scenario) -> Self {
        Self::Scenario(scenario)
    }
}

impl From<ScenarioOutline> for FeatureChild {
    fn from(outline: ScenarioOutline) -> Self {
        Self::ScenarioOutline(outline)
    }
}

/// A named, tagged collection of scenarios sharing one background.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Feature {
    head: NodeHead,
    language: Language,
    background: Arc<Background>,
    tags: Tags,
    children: Vec<FeatureChild>,
}

impl Feature {
    pub(crate) fn new(
        head: NodeHead,
        language: Language,
        background: Arc<Background>,
        tags: Tags,
        children: Vec<FeatureChild>,
    ) -> Self {
        Self {
            head,
            language,
            background,
            tags,
            children,
        }
    }

    head_accessors!();

    /// Dialect the document was written in.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The background, or the empty background when none was declared.
    ///
    /// Every child holds a clone of this `Arc`.
    #[must_use]
    pub fn background(&self) -> &Arc<Background> {
        &self.background
    }

    /// Tags written on the feature.
    #[must_use]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Scenarios and outlines in document order.
    #[must_use]
    pub fn children(&self) -> &[FeatureChild] {
        &self.children
    }

    /// Iterate the concrete scenarios only.
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.children.iter().filter_map(FeatureChild::as_scenario)
    }

    /// Iterate the outlines only.
    pub fn scenario_outlines(&self) -> impl Iterator<Item = &ScenarioOutline> {
        self.children
            .iter()
            .filter_map(FeatureChild::as_scenario_outline)
    }
}
