//! The parser-facing event protocol and the tree-building listener.

use crate::builder::{
    Annotated, BackgroundBuilder, ChildBuilder, ExamplesTableBuilder, FeatureBuilder,
    ScenarioBuilder, ScenarioOutlineBuilder, StepBuilder,
};
use crate::config::ListenerConfig;
use crate::diagnostics::{DiagnosticSink, IgnoreDiagnostics, SyntaxError};
use crate::errors::BuildError;
use crate::node::Feature;
use crate::record::NodeRecord;
use crate::value::Language;

/// Events emitted by a Gherkin parser for one document, in source order.
///
/// Parsers call `open_feature` at most once and before any other `open_*` or
/// `add_*` event. `add_step` and `add_examples` apply to the container most
/// recently opened.
pub trait EventListener {
    /// The file the following events come from.
    fn set_path(&mut self, path: &str);
    /// The dialect of the document.
    fn set_language(&mut self, code: &str);
    /// Start the feature.
    fn open_feature(&mut self, node: NodeRecord);
    /// Start the feature's background.
    fn open_background(&mut self, node: NodeRecord);
    /// Start a scenario.
    fn open_scenario(&mut self, node: NodeRecord);
    /// Start a scenario outline.
    fn open_scenario_outline(&mut self, node: NodeRecord);
    /// Add an Examples block to the current outline.
    fn add_examples(&mut self, node: NodeRecord);
    /// Add a step to the current container.
    fn add_step(&mut self, node: NodeRecord);
    /// No more events follow.
    fn end_of_document(&mut self);
    /// The parser rejected part of the document.
    fn on_syntax_error(
        &mut self,
        parser_state: &str,
        offending_event: &str,
        legal_events: &[&str],
        line: usize,
    );
}

/// Which container `add_*` events go to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Current {
    Background,
    Child(usize),
}

/// Builds a [`Feature`] from parser events.
///
/// # Examples
///
/// ```
/// use cuke_ast::{AstBuilder, EventListener, NodeRecord};
///
/// let mut listener = AstBuilder::default();
/// listener.set_path("features/demo.feature");
/// listener.set_language("en");
/// listener.open_feature(NodeRecord::new("Feature", "Demo", 1));
/// listener.open_scenario(NodeRecord::new("Scenario", "first", 3));
/// listener.add_step(NodeRecord::new("Given ", "something", 4));
/// listener.end_of_document();
///
/// let feature = listener.result().expect("language is set").expect("feature is open");
/// assert_eq!(feature.children().len(), 1);
/// assert_eq!(feature.location().to_string(), "features/demo.feature:1");
/// ```
#[derive(Debug)]
pub struct AstBuilder<S = IgnoreDiagnostics> {
    config: ListenerConfig,
    path: String,
    language: Option<Language>,
    feature: Option<FeatureBuilder>,
    current: Option<Current>,
    sink: S,
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new(ListenerConfig::default())
    }
}

impl AstBuilder {
    /// Create a listener that ignores syntax errors.
    #[must_use]
    pub fn new(config: ListenerConfig) -> Self {
        Self::with_sink(config, IgnoreDiagnostics)
    }
}

impl<S: DiagnosticSink> AstBuilder<S> {
    /// Create a listener that forwards syntax errors to `sink`.
    #[must_use]
    pub fn with_sink(config: ListenerConfig, sink: S) -> Self {
        let path = config.path_style.apply(&config.default_path);
        Self {
            config,
            path,
            language: None,
            feature: None,
            current: None,
            sink,
        }
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    /// The diagnostic sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the listener, returning its diagnostic sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Finalise the tree.
    ///
    /// Returns `Ok(None)` when no feature was opened. May be called more than
    /// once; each call yields an equal tree sharing the same background.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::LanguageNotSet`] if `set_language` was never
    /// called.
    pub fn result(&self) -> Result<Option<Feature>, BuildError> {
        let language = self.language.as_ref().ok_or(BuildError::LanguageNotSet)?;
        Ok(self.feature.as_ref().map(|feature| {
            let built = feature.result(language);
            log::debug!(
                "finalised feature '{}' with {} children",
                built.name(),
                built.children().len()
            );
            built
        }))
    }

    fn annotate(&self, node: NodeRecord) -> Annotated {
        Annotated::new(&self.path, node)
    }

    /// The open feature, or `None` with a warning naming the dropped event.
    fn feature_for(&mut self, event: &str, line: usize) -> Option<&mut FeatureBuilder> {
        if self.feature.is_none() {
            log::warn!("{event} at line {line} arrived before open_feature; dropped");
        }
        self.feature.as_mut()
    }

    fn open_child(&mut self, event: &str, node: NodeRecord, make: fn(Annotated) -> ChildBuilder) {
        let line = node.line;
        let child = make(self.annotate(node));
        let Some(feature) = self.feature_for(event, line) else {
            return;
        };
        let index = feature.add_child(child);
        self.current = Some(Current::Child(index));
    }
}

impl<S: DiagnosticSink> EventListener for AstBuilder<S> {
    fn set_path(&mut self, path: &str) {
        self.path = self.config.path_style.apply(path);
    }

    fn set_language(&mut self, code: &str) {
        if let Some(previous) = &self.language {
            log::debug!("language changed from '{previous}' to '{code}'");
        }
        self.language = Some(Language::from(code));
    }

    fn open_feature(&mut self, node: NodeRecord) {
        log::debug!("opening feature '{}' in {}", node.name.trim_start(), self.path);
        if self.feature.is_some() {
            log::warn!("second open_feature at line {}; replacing the first", node.line);
        }
        self.feature = Some(FeatureBuilder::new(self.annotate(node)));
        self.current = None;
    }

    fn open_background(&mut self, node: NodeRecord) {
        let line = node.line;
        let background = BackgroundBuilder::new(self.annotate(node));
        let Some(feature) = self.feature_for("open_background", line) else {
            return;
        };
        if feature.set_background(background) {
            self.current = Some(Current::Background);
        } else {
            log::warn!("second background at line {line}; dropped");
            self.current = None;
        }
    }

    fn open_scenario(&mut self, node: NodeRecord) {
        self.open_child("open_scenario", node, |context| {
            ChildBuilder::Scenario(ScenarioBuilder::new(context))
        });
    }

    fn open_scenario_outline(&mut self, node: NodeRecord) {
        self.open_child("open_scenario_outline", node, |context| {
            ChildBuilder::ScenarioOutline(ScenarioOutlineBuilder::new(context))
        });
    }

    fn add_examples(&mut self, node: NodeRecord) {
        let line = node.line;
        let examples = ExamplesTableBuilder::new(self.annotate(node));
        let current = self.current;
        let Some(feature) = self.feature_for("add_examples", line) else {
            return;
        };
        let outline = match current {
            Some(Current::Child(index)) => match feature.child_mut(index) {
                Some(ChildBuilder::ScenarioOutline(outline)) => Some(outline),
                _ => None,
            },
            _ => None,
        };
        match outline {
            Some(outline) => outline.add_examples(&examples),
            None => log::warn!("examples at line {line} have no open scenario outline; dropped"),
        }
    }

    fn add_step(&mut self, node: NodeRecord) {
        let line = node.line;
        let step = StepBuilder::new(self.annotate(node));
        let current = self.current;
        let Some(feature) = self.feature_for("add_step", line) else {
            return;
        };
        match current {
            Some(Current::Background) => match feature.background_mut() {
                Some(background) => background.add_step(step),
                None => log::warn!("step at line {line} has no open background; dropped"),
            },
            Some(Current::Child(index)) => match feature.child_mut(index) {
                Some(ChildBuilder::Scenario(scenario)) => scenario.add_step(step),
                Some(ChildBuilder::ScenarioOutline(outline)) => outline.add_step(step),
                None => log::warn!("step at line {line} has no open container; dropped"),
            },
            None => log::warn!("step at line {line} has no open container; dropped"),
        }
    }

    fn end_of_document(&mut self) {
        log::debug!("end of document {}", self.path);
    }

    fn on_syntax_error(
        &mut self,
        parser_state: &str,
        offending_event: &str,
        legal_events: &[&str],
        line: usize,
    ) {
        let error = SyntaxError {
            parser_state: parser_state.to_owned(),
            offending_event: offending_event.to_owned(),
            legal_events: legal_events.iter().map(|&event| event.to_owned()).collect(),
            line,
        };
        log::debug!("syntax error in {}: {error}", self.path);
        self.sink.syntax_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollectDiagnostics, PathStyle};
    use rstest::{fixture, rstest};

    #[fixture]
    fn listener() -> AstBuilder {
        let mut listener = AstBuilder::default();
        listener.set_path("features/a.feature");
        listener.set_language("en");
        listener
    }

    #[rstest]
    fn no_feature_yields_none(listener: AstBuilder) {
        assert_eq!(listener.result(), Ok(None));
    }

    #[test]
    fn result_without_language_fails() {
        let mut listener = AstBuilder::default();
        listener.open_feature(NodeRecord::new("Feature", "x", 1));
        assert_eq!(listener.result(), Err(BuildError::LanguageNotSet));
    }

    #[test]
    fn default_path_is_used_until_set() {
        let mut listener = AstBuilder::default();
        listener.set_language("en");
        listener.open_feature(NodeRecord::new("Feature", "x", 1));
        let Ok(Some(feature)) = listener.result() else {
            panic!("feature should build");
        };
        assert_eq!(feature.location().file(), "UNKNOWN-FILE");
    }

    #[test]
    fn path_style_is_applied_to_set_path() {
        let config = ListenerConfig::default().with_path_style(PathStyle::Backslash);
        let mut listener = AstBuilder::new(config);
        listener.set_path("features/nested/a.feature");
        listener.set_language("en");
        listener.open_feature(NodeRecord::new("Feature", "x", 1));
        let Ok(Some(feature)) = listener.result() else {
            panic!("feature should build");
        };
        assert_eq!(feature.location().file(), r"features\nested\a.feature");
    }

    #[rstest]
    fn steps_follow_the_current_container(mut listener: AstBuilder) {
        listener.open_feature(NodeRecord::new("Feature", "x", 1));
        listener.open_background(NodeRecord::new("Background", "", 2));
        listener.add_step(NodeRecord::new("Given ", "setup", 3));
        listener.open_scenario(NodeRecord::new("Scenario", "s", 5));
        listener.add_step(NodeRecord::new("When ", "act", 6));
        listener.add_step(NodeRecord::new("Then ", "check", 7));

        let Ok(Some(feature)) = listener.result() else {
            panic!("feature should build");
        };
        assert_eq!(feature.background().steps().len(), 1);
        let Some(scenario) = feature.scenarios().next() else {
            panic!("scenario should exist");
        };
        let names: Vec<_> = scenario.steps().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["act", "check"]);
    }

    #[rstest]
    fn orphan_events_are_dropped(mut listener: AstBuilder) {
        listener.add_step(NodeRecord::new("Given ", "lost", 1));
        listener.open_scenario(NodeRecord::new("Scenario", "lost", 2));
        listener.open_feature(NodeRecord::new("Feature", "x", 3));
        listener.add_step(NodeRecord::new("Given ", "no container", 4));
        listener.open_scenario(NodeRecord::new("Scenario", "s", 5));
        listener.add_examples(NodeRecord::new("Examples", "", 6));

        let Ok(Some(feature)) = listener.result() else {
            panic!("feature should build");
        };
        assert_eq!(feature.children().len(), 1);
        assert!(feature.background().steps().is_empty());
    }

    #[rstest]
    fn second_background_is_ignored(mut listener: AstBuilder) {
        listener.open_feature(NodeRecord::new("Feature", "x", 1));
        listener.open_background(NodeRecord::new("Background", "first", 2));
        listener.open_background(NodeRecord::new("Background", "second", 4));
        listener.add_step(NodeRecord::new("Given ", "dropped", 5));

        let Ok(Some(feature)) = listener.result() else {
            panic!("feature should build");
        };
        assert_eq!(feature.background().name(), "first");
        assert!(feature.background().steps().is_empty());
    }

    #[test]
    fn syntax_errors_reach_the_sink() {
        let mut listener = AstBuilder::with_sink(ListenerConfig::default(), CollectDiagnostics::default());
        listener.on_syntax_error("feature", "step", &["scenario", "background"], 7);
        let errors = listener.into_sink().into_errors();
        assert_eq!(
            errors,
            vec![SyntaxError {
                parser_state: "feature".into(),
                offending_event: "step".into(),
                legal_events: vec!["scenario".into(), "background".into()],
                line: 7,
            }]
        );
    }

    #[test]
    fn last_language_wins() {
        let mut listener = AstBuilder::default();
        listener.set_language("en");
        listener.set_language("fr");
        listener.open_feature(NodeRecord::new("Fonctionnalité", "x", 1));
        let Ok(Some(feature)) = listener.result() else {
            panic!("feature should build");
        };
        assert_eq!(feature.language().code(), "fr");
    }
}
