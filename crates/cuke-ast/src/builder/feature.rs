//! Feature builder.

use std::cell::OnceCell;
use std::sync::Arc;

use super::{Annotated, BackgroundBuilder, ScenarioBuilder, ScenarioOutlineBuilder};
use crate::node::{Background, Feature, FeatureChild};
use crate::value::Language;

/// A pending child of the feature.
#[derive(Clone, Debug)]
pub(crate) enum ChildBuilder {
    Scenario(ScenarioBuilder),
    ScenarioOutline(ScenarioOutlineBuilder),
}

#[derive(Debug)]
pub(crate) struct FeatureBuilder {
    context: Annotated,
    background: Option<BackgroundBuilder>,
    children: Vec<ChildBuilder>,
    resolved_background: OnceCell<Arc<Background>>,
}

impl FeatureBuilder {
    pub(crate) fn new(context: Annotated) -> Self {
        Self {
            context,
            background: None,
            children: Vec::new(),
            resolved_background: OnceCell::new(),
        }
    }

    /// Install the background; returns `false` if one is already present.
    pub(crate) fn set_background(&mut self, builder: BackgroundBuilder) -> bool {
        if self.background.is_some() {
            return false;
        }
        self.background = Some(builder);
        true
    }

    pub(crate) fn background_mut(&mut self) -> Option<&mut BackgroundBuilder> {
        self.background.as_mut()
    }

    /// Append a child and return its index.
    pub(crate) fn add_child(&mut self, child: ChildBuilder) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut ChildBuilder> {
        self.children.get_mut(index)
    }

    /// The background shared by every child, built on first request.
    ///
    /// Later calls return the same allocation regardless of `language`.
    fn background(&self, language: &Language) -> Arc<Background> {
        let resolved = self.resolved_background.get_or_init(|| {
            let background = match &self.background {
                Some(builder) => builder.result(language),
                None => Background::empty(language.clone()),
            };
            Arc::new(background)
        });
        Arc::clone(resolved)
    }

    pub(crate) fn result(&self, language: &Language) -> Feature {
        let background = self.background(language);
        let tags = self.context.tags();
        let children = self
            .children
            .iter()
            .map(|child| match child {
                ChildBuilder::Scenario(builder) => {
                    FeatureChild::Scenario(builder.result(&background, language, &tags))
                }
                ChildBuilder::ScenarioOutline(builder) => {
                    FeatureChild::ScenarioOutline(builder.result(&background, language, &tags))
                }
            })
            .collect();
        Feature::new(
            self.context.trimmed_head(),
            language.clone(),
            background,
            tags,
            children,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StepBuilder;
    use crate::record::NodeRecord;

    fn context(keyword: &str, name: &str, line: usize) -> Annotated {
        Annotated::new("f.feature", NodeRecord::new(keyword, name, line))
    }

    #[test]
    fn background_is_resolved_once() {
        let mut builder = FeatureBuilder::new(context("Feature", "demo", 1));
        let mut background = BackgroundBuilder::new(context("Background", "", 2));
        background.add_step(StepBuilder::new(context("Given ", "setup", 3)));
        assert!(builder.set_background(background));

        let language = Language::from("en");
        let first = builder.result(&language);
        let second = builder.result(&language);

        assert!(Arc::ptr_eq(first.background(), second.background()));
        assert_eq!(first, second);
    }

    #[test]
    fn second_background_is_refused() {
        let mut builder = FeatureBuilder::new(context("Feature", "demo", 1));
        assert!(builder.set_background(BackgroundBuilder::new(context("Background", "a", 2))));
        assert!(!builder.set_background(BackgroundBuilder::new(context("Background", "b", 5))));
        let feature = builder.result(&Language::from("en"));
        assert_eq!(feature.background().name(), "a");
    }

    #[test]
    fn missing_background_resolves_to_empty() {
        let builder = FeatureBuilder::new(context("Feature", "demo", 1));
        let feature = builder.result(&Language::from("en"));
        assert!(feature.background().is_empty_background());
    }

    #[test]
    fn children_keep_arrival_order() {
        let mut builder = FeatureBuilder::new(context("Feature", "demo", 1));
        builder.add_child(ChildBuilder::Scenario(ScenarioBuilder::new(context(
            "Scenario", "one", 2,
        ))));
        builder.add_child(ChildBuilder::ScenarioOutline(ScenarioOutlineBuilder::new(
            context("Scenario Outline", "two", 5),
        )));
        builder.add_child(ChildBuilder::Scenario(ScenarioBuilder::new(context(
            "Scenario", "three", 9,
        ))));

        let feature = builder.result(&Language::from("en"));
        let names: Vec<_> = feature.children().iter().map(FeatureChild::name).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
        assert!(feature.children().iter().all(|child| match child {
            FeatureChild::Scenario(s) => Arc::ptr_eq(s.background(), feature.background()),
            FeatureChild::ScenarioOutline(o) => Arc::ptr_eq(o.background(), feature.background()),
        }));
    }
}
