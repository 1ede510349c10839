//! Engine behavior over realistic activity documents

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scribe_doc::{apply, apply_all, find, insert, Operation};
use scribe_test_utils::{init_tracing, multi_part_activity, multiple_choice_activity};
use serde_json::json;

proptest! {
    #[test]
    fn prop_insert_index_always_clamps(index in -10i64..200) {
        let mut doc = json!({ "items": [1, 2, 3] });
        insert(&mut doc, "$.items", &json!(99), Some(index)).unwrap();

        let items = doc["items"].as_array().unwrap();
        prop_assert_eq!(items.len(), 4);
        let expected = if (0..=3).contains(&index) {
            usize::try_from(index).unwrap()
        } else {
            3
        };
        prop_assert_eq!(&items[expected], &json!(99));
    }
}

#[test]
fn find_concatenates_across_parts_in_document_order() {
    init_tracing();
    let doc = multi_part_activity();
    let hints = find(&doc, "$..hints").unwrap();
    let ids: Vec<&str> = hints.iter().map(|h| h["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["h1", "h2", "h3"]);
}

#[test]
fn removing_a_part_via_filter() {
    init_tracing();
    let mut doc = multi_part_activity();
    apply_all(
        &mut doc,
        &[Operation::filter("$..parts", "[?(@.id!='p1')]")],
    )
    .unwrap();
    let parts = doc["authoring"]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0]["id"], "p2");
}

#[test]
fn replacing_a_response_rule_in_place() {
    init_tracing();
    let mut doc = multiple_choice_activity();
    apply(
        &mut doc,
        &Operation::replace("$..responses[?(@.id=='r1')].rule", json!("input like {c2}")),
    )
    .unwrap();
    assert_eq!(
        doc["authoring"]["parts"][0]["responses"][0]["rule"],
        "input like {c2}"
    );
    // the sibling response is untouched
    assert_eq!(
        doc["authoring"]["parts"][0]["responses"][1]["rule"],
        "input like {.*}"
    );
}

#[test]
fn batch_failure_restores_the_whole_document() {
    init_tracing();
    let mut doc = multi_part_activity();
    let before = doc.clone();
    let result = apply_all(
        &mut doc,
        &[
            Operation::insert("$..parts[?(@.id=='p1')].hints", json!({ "id": "hx" })),
            Operation::replace("$..responses[?(@.id==']", json!(null)),
        ],
    );
    assert!(result.is_err());
    assert_eq!(doc, before);
}

#[test]
fn insert_targets_every_matched_sequence() {
    init_tracing();
    let mut doc = multi_part_activity();
    apply(
        &mut doc,
        &Operation::insert("$..hints", json!({ "id": "hx", "content": [] })),
    )
    .unwrap();
    for part in doc["authoring"]["parts"].as_array().unwrap() {
        let last = part["hints"].as_array().unwrap().last().unwrap();
        assert_eq!(last["id"], "hx");
    }
}

#[test]
fn operations_replay_after_serialization() {
    init_tracing();
    let ops = vec![
        Operation::insert_at("$.choices", json!({ "id": "c0", "content": [] }), 0),
        Operation::filter("$.choices", "[?(@.id!='c2')]"),
    ];
    let text = serde_json::to_string(&ops).unwrap();
    let replayed: Vec<Operation> = serde_json::from_str(&text).unwrap();

    let mut direct = multiple_choice_activity();
    let mut via_json = multiple_choice_activity();
    apply_all(&mut direct, &ops).unwrap();
    apply_all(&mut via_json, &replayed).unwrap();
    assert_eq!(direct, via_json);
    assert_eq!(direct["choices"][0]["id"], "c0");
}
