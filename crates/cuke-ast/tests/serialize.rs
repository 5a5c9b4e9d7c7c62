//! Serialization of finished trees behind the `serde` feature.

use cuke_ast::{AstBuilder, EventListener, NodeRecord, RowRecord};

#[test]
#[expect(clippy::expect_used, reason = "test input is valid")]
fn feature_serializes_to_json() {
    let mut listener = AstBuilder::default();
    listener.set_path("a.feature");
    listener.set_language("en");
    listener.open_feature(NodeRecord::new("Feature", "Demo", 1).with_tags(["@x"], 1));
    listener.open_scenario_outline(NodeRecord::new("Scenario Outline", "o", 3));
    listener.add_step(NodeRecord::new("Given ", "<n>", 4));
    listener.add_examples(NodeRecord::new("Examples", "", 5).with_rows([
        RowRecord::new(["n"], 6),
        RowRecord::new(["1"], 7),
    ]));
    let feature = listener
        .result()
        .expect("language is set")
        .expect("feature is open");

    let json = serde_json::to_value(&feature).expect("feature serializes");
    assert_eq!(json["head"]["name"], "Demo");
    assert_eq!(json["language"], "en");
    assert_eq!(json["tags"]["tags"][0]["name"], "@x");
    assert_eq!(json["background"]["head"], serde_json::Value::Null);
    let outline = &json["children"][0]["ScenarioOutline"];
    assert_eq!(outline["examples_tables"][0]["rows"][0]["location"]["line"], 7);
}
