//! Drive an [`EventListener`] from a document parsed by the `gherkin` crate.
//!
//! The `gherkin` AST keeps less than the event protocol can carry, so a few
//! record fields are approximated:
//!
//! - comments are not retained by the parser and are always empty;
//! - tags carry no line of their own and are placed on the line above the
//!   node they annotate;
//! - table rows are numbered consecutively from the table's first line;
//! - a doc string starts on the line after its step.
//!
//! Rules are not part of the event protocol. Their scenarios are replayed as
//! direct children of the feature, interleaved with the feature's own
//! scenarios by source line. Rule backgrounds cannot be expressed and are
//! dropped with a warning.

use gherkin::GherkinEnv;

use crate::config::ListenerConfig;
use crate::errors::ReplayError;
use crate::listener::{AstBuilder, EventListener};
use crate::node::Feature;
use crate::record::{DocStringRecord, NodeRecord, RowRecord, TagRecord};

/// Language code of [`GherkinEnv::default`].
const DEFAULT_LANGUAGE: &str = "en";

fn tag_records(tags: &[String], line: usize) -> Vec<TagRecord> {
    let line = line.saturating_sub(1).max(1);
    tags.iter()
        .map(|name| TagRecord {
            name: name.clone(),
            line,
        })
        .collect()
}

fn table_rows(table: Option<&gherkin::Table>) -> Vec<RowRecord> {
    table.map_or_else(Vec::new, |table| {
        table
            .rows
            .iter()
            .zip(table.position.line..)
            .map(|(cells, line)| RowRecord::new(cells.iter().cloned(), line))
            .collect()
    })
}

fn step_record(step: &gherkin::Step) -> NodeRecord {
    let line = step.position.line;
    let mut record = NodeRecord::new(step.keyword.as_str(), step.value.as_str(), line);
    record.doc_string = step.docstring.as_ref().map(|content| DocStringRecord {
        content: content.clone(),
        content_type: None,
        line: line + 1,
    });
    if record.doc_string.is_none() {
        record.rows = table_rows(step.table.as_ref());
    }
    record
}

fn scenario_record(scenario: &gherkin::Scenario) -> NodeRecord {
    let line = scenario.position.line;
    NodeRecord {
        tags: tag_records(&scenario.tags, line),
        description: scenario.description.clone().unwrap_or_default(),
        ..NodeRecord::new(scenario.keyword.as_str(), scenario.name.as_str(), line)
    }
}

fn examples_record(examples: &gherkin::Examples) -> NodeRecord {
    let line = examples.position.line;
    NodeRecord {
        tags: tag_records(&examples.tags, line),
        description: examples.description.clone().unwrap_or_default(),
        rows: table_rows(examples.table.as_ref()),
        ..NodeRecord::new(
            examples.keyword.as_str(),
            examples.name.as_deref().unwrap_or_default(),
            line,
        )
    }
}

fn replay_steps(steps: &[gherkin::Step], listener: &mut impl EventListener) {
    for step in steps {
        listener.add_step(step_record(step));
    }
}

fn replay_scenario(scenario: &gherkin::Scenario, listener: &mut impl EventListener) {
    if scenario.examples.is_empty() {
        listener.open_scenario(scenario_record(scenario));
        replay_steps(&scenario.steps, listener);
        return;
    }
    listener.open_scenario_outline(scenario_record(scenario));
    replay_steps(&scenario.steps, listener);
    for examples in &scenario.examples {
        listener.add_examples(examples_record(examples));
    }
}

/// Emit the events describing `feature`, from `set_path` to
/// `end_of_document`.
pub fn replay_feature(
    feature: &gherkin::Feature,
    path: &str,
    language: &str,
    listener: &mut impl EventListener,
) {
    listener.set_path(path);
    listener.set_language(language);

    let line = feature.position.line;
    listener.open_feature(NodeRecord {
        tags: tag_records(&feature.tags, line),
        description: feature.description.clone().unwrap_or_default(),
        ..NodeRecord::new(feature.keyword.as_str(), feature.name.as_str(), line)
    });

    if let Some(background) = &feature.background {
        let line = background.position.line;
        listener.open_background(NodeRecord {
            description: background.description.clone().unwrap_or_default(),
            ..NodeRecord::new(background.keyword.as_str(), background.name.as_str(), line)
        });
        replay_steps(&background.steps, listener);
    }

    let mut scenarios: Vec<&gherkin::Scenario> = feature.scenarios.iter().collect();
    for rule in &feature.rules {
        if rule.background.is_some() {
            log::warn!(
                "{path}: background of rule '{}' at line {} is not replayed",
                rule.name,
                rule.position.line
            );
        }
        scenarios.extend(&rule.scenarios);
    }
    scenarios.sort_by_key(|scenario| scenario.position.line);
    for scenario in scenarios {
        replay_scenario(scenario, listener);
    }

    listener.end_of_document();
}

/// Parse English Gherkin `text` and build its feature tree.
///
/// # Errors
///
/// Returns [`ReplayError::Parse`] when the `gherkin` parser rejects the text.
///
/// # Examples
///
/// ```
/// use cuke_ast::ListenerConfig;
/// use cuke_ast::replay::parse_source;
///
/// let text = "Feature: Demo\n  Scenario: one\n    Given a step\n";
/// let feature = parse_source(text, "demo.feature", ListenerConfig::default())
///     .expect("valid gherkin")
///     .expect("document has a feature");
/// assert_eq!(feature.name(), "Demo");
/// ```
pub fn parse_source(
    text: &str,
    path: &str,
    config: ListenerConfig,
) -> Result<Option<Feature>, ReplayError> {
    let parsed = gherkin::Feature::parse(text, GherkinEnv::default())?;
    let mut listener = AstBuilder::new(config);
    replay_feature(&parsed, path, DEFAULT_LANGUAGE, &mut listener);
    Ok(listener.result()?)
}
