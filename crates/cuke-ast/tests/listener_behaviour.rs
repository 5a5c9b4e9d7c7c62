//! Behavioural tests for building feature trees from parser events.

use cuke_ast::{
    AstBuilder, BuildError, CollectDiagnostics, EventListener, FeatureChild, ListenerConfig,
    NodeRecord, PathStyle, RowRecord,
};
use rstest::{fixture, rstest};

#[fixture]
fn listener() -> AstBuilder {
    let mut listener = AstBuilder::default();
    listener.set_path("features/shop.feature");
    listener.set_language("en");
    listener
}

#[expect(clippy::expect_used, reason = "tests require a built feature")]
fn build(listener: &AstBuilder) -> cuke_ast::Feature {
    listener
        .result()
        .expect("language should be set")
        .expect("feature should be open")
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn children_match_arrival_order(mut listener: AstBuilder, #[case] count: usize) {
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    for (n, plain) in (0..count).zip([true, false].into_iter().cycle()) {
        let name = format!("child {n}");
        if plain {
            listener.open_scenario(NodeRecord::new("Scenario", name, 10 * (n + 1)));
        } else {
            listener.open_scenario_outline(NodeRecord::new("Scenario Outline", name, 10 * (n + 1)));
        }
    }
    listener.end_of_document();

    let feature = build(&listener);
    let names: Vec<String> = feature
        .children()
        .iter()
        .map(|child| child.name().to_owned())
        .collect();
    let expected: Vec<String> = (0..count).map(|n| format!("child {n}")).collect();
    assert_eq!(names, expected);
}

#[rstest]
fn undeclared_background_is_empty_not_absent(mut listener: AstBuilder) {
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    listener.open_scenario(NodeRecord::new("Scenario", "browse", 3));
    let feature = build(&listener);

    let background = feature.background();
    assert!(background.is_empty_background());
    assert!(background.steps().is_empty());
    assert_eq!(background.location(), None);
    let Some(scenario) = feature.scenarios().next() else {
        panic!("scenario should exist");
    };
    assert!(scenario.background().is_empty_background());
}

#[rstest]
fn declared_background_is_shared_by_every_child(mut listener: AstBuilder) {
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    listener.open_background(NodeRecord::new("Background", "", 2));
    listener.add_step(NodeRecord::new("Given ", "a customer", 3));
    listener.open_scenario(NodeRecord::new("Scenario", "browse", 5));
    listener.open_scenario_outline(NodeRecord::new("Scenario Outline", "buy", 8));
    let feature = build(&listener);

    assert!(!feature.background().is_empty_background());
    for child in feature.children() {
        let shared = match child {
            FeatureChild::Scenario(scenario) => scenario.background(),
            FeatureChild::ScenarioOutline(outline) => outline.background(),
        };
        assert!(std::sync::Arc::ptr_eq(shared, feature.background()));
    }
}

#[rstest]
fn repeated_results_are_equal(mut listener: AstBuilder) {
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    listener.open_background(NodeRecord::new("Background", "", 2));
    listener.add_step(NodeRecord::new("Given ", "a customer", 3));
    assert_eq!(build(&listener), build(&listener));
}

#[test]
fn result_before_language_is_an_error() {
    let mut listener = AstBuilder::default();
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    let Err(err) = listener.result() else {
        panic!("result without language must fail");
    };
    assert_eq!(err, BuildError::LanguageNotSet);
    assert_eq!(err.to_string(), "language has not been set");
}

#[rstest]
fn empty_document_has_no_feature(listener: AstBuilder) {
    assert_eq!(listener.result(), Ok(None));
}

#[rstest]
fn comments_round_trip_as_joined_lines(mut listener: AstBuilder) {
    listener.open_feature(
        NodeRecord::new("Feature", "Shop", 3).with_comments(["# owner: sales", "# reviewed"], 1),
    );
    listener.open_scenario(NodeRecord::new("Scenario", "browse", 5));
    let feature = build(&listener);

    assert_eq!(feature.comment().as_str(), "# owner: sales\n# reviewed");
    assert_eq!(
        feature.comment().lines().collect::<Vec<_>>(),
        vec!["# owner: sales", "# reviewed"]
    );
    let Some(scenario) = feature.scenarios().next() else {
        panic!("scenario should exist");
    };
    assert!(scenario.comment().is_empty());
}

#[rstest]
fn feature_name_and_description_are_trimmed(mut listener: AstBuilder) {
    listener.open_feature(
        NodeRecord::new("Feature", "  Shop  ", 1).with_description("  Buying things.  \n"),
    );
    listener.open_scenario(NodeRecord::new("Scenario", "  browse", 3).with_description("  x "));
    let feature = build(&listener);

    assert_eq!(feature.name(), "Shop  ");
    assert_eq!(feature.description(), "  Buying things.");
    let Some(scenario) = feature.scenarios().next() else {
        panic!("scenario should exist");
    };
    assert_eq!(scenario.name(), "  browse");
    assert_eq!(scenario.description(), "  x ");
}

#[rstest]
fn feature_and_scenario_tags_stay_separate(mut listener: AstBuilder) {
    listener.open_feature(NodeRecord::new("Feature", "Shop", 2).with_tags(["@shop", "wip"], 1));
    listener.open_scenario(NodeRecord::new("Scenario", "browse", 5).with_tags(["@fast", "@wip"], 4));
    let feature = build(&listener);
    let Some(scenario) = feature.scenarios().next() else {
        panic!("scenario should exist");
    };

    assert_eq!(feature.tags().names().collect::<Vec<_>>(), vec!["@shop", "@wip"]);
    assert_eq!(scenario.tags().names().collect::<Vec<_>>(), vec!["@fast", "@wip"]);
    assert_eq!(scenario.feature_tags(), feature.tags());
    assert_eq!(
        scenario.all_tag_names().collect::<Vec<_>>(),
        vec!["@shop", "@wip", "@fast"]
    );
    let Some(first) = scenario.tags().iter().next() else {
        panic!("scenario should have tags");
    };
    assert_eq!(first.location().line(), 4);
}

#[rstest]
#[case(PathStyle::AsGiven, "features/shop/cart.feature")]
#[case(PathStyle::Backslash, r"features\shop\cart.feature")]
fn locations_use_the_configured_path_style(#[case] style: PathStyle, #[case] expected: &str) {
    let mut listener = AstBuilder::new(ListenerConfig::default().with_path_style(style));
    listener.set_path("features/shop/cart.feature");
    listener.set_language("en");
    listener.open_feature(NodeRecord::new("Feature", "Cart", 1));
    listener.open_scenario(NodeRecord::new("Scenario", "add", 3));
    listener.add_step(NodeRecord::new("Given ", "an item", 4));
    let feature = build(&listener);

    assert_eq!(feature.location().file(), expected);
    let Some(step) = feature.scenarios().next().and_then(|s| s.steps().first()) else {
        panic!("step should exist");
    };
    assert_eq!(step.location().to_string(), format!("{expected}:4"));
}

#[rstest]
fn steps_keep_their_arguments(mut listener: AstBuilder) {
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    listener.open_scenario(NodeRecord::new("Scenario", "browse", 2));
    listener.add_step(NodeRecord::new("Given ", "a catalogue", 3).with_rows([
        RowRecord::new(["sku", "price"], 4),
        RowRecord::new(["A1", "10"], 5),
    ]));
    listener.add_step(NodeRecord::new("Then ", "I see", 6).with_doc_string("A1 costs 10", 7));
    listener.add_step(NodeRecord::new("And ", "nothing else", 9));
    let feature = build(&listener);
    let Some(scenario) = feature.scenarios().next() else {
        panic!("scenario should exist");
    };

    let arguments: Vec<_> = scenario
        .steps()
        .iter()
        .map(|step| step.multiline_argument())
        .collect();
    assert!(matches!(arguments.as_slice(), [Some(_), Some(_), None]));
    let Some(table) = arguments.first().copied().flatten().and_then(|a| a.as_data_table()) else {
        panic!("first step should carry a table");
    };
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.location().line(), 4);
    let Some(doc) = arguments.get(1).copied().flatten().and_then(|a| a.as_doc_string()) else {
        panic!("second step should carry a doc string");
    };
    assert_eq!(doc.content(), "A1 costs 10");
}

#[test]
fn syntax_errors_are_collected_without_failing() {
    let mut listener =
        AstBuilder::with_sink(ListenerConfig::default(), CollectDiagnostics::default());
    listener.set_language("en");
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    listener.on_syntax_error("feature", "#DocString", &["#ScenarioLine", "#TagLine"], 2);
    listener.open_scenario(NodeRecord::new("Scenario", "browse", 4));

    assert!(matches!(listener.result(), Ok(Some(_))));
    let errors = listener.into_sink().into_errors();
    assert_eq!(errors.len(), 1);
    let Some(error) = errors.first() else {
        panic!("one error expected");
    };
    assert_eq!(error.offending_event, "#DocString");
    assert_eq!(error.legal_events, vec!["#ScenarioLine", "#TagLine"]);
}

#[test]
fn closures_receive_syntax_errors() {
    let mut lines = Vec::new();
    {
        let sink = |error: cuke_ast::SyntaxError| lines.push(error.line);
        let mut listener = AstBuilder::with_sink(ListenerConfig::default(), sink);
        listener.on_syntax_error("scenario", "#EOF", &["#StepLine"], 12);
    }
    assert_eq!(lines, vec![12]);
}

#[rstest]
fn nodes_keep_their_source_record(mut listener: AstBuilder) {
    let record = NodeRecord::new("Scenario", "browse", 3).with_tags(["@x"], 2);
    listener.open_feature(NodeRecord::new("Feature", "Shop", 1));
    listener.open_scenario(record.clone());
    let feature = build(&listener);
    let Some(scenario) = feature.scenarios().next() else {
        panic!("scenario should exist");
    };
    assert_eq!(**scenario.source_record(), record);
    assert_eq!(feature.source_record().name, "Shop");
}
