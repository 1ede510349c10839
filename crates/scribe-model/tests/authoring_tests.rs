//! End-to-end authoring edits: the overlay, the rule compiler, and the
//! path engine working together the way a dispatch layer drives them.

use pretty_assertions::assert_eq;
use scribe_model::{choices, entity_id, hints, responses};
use scribe_rules::{create_rule_for_ids, is_catch_all_rule, parse_text_input_from_rule};
use scribe_test_utils::{init_tracing, multi_part_activity, multiple_choice_activity};
use serde_json::json;

#[test]
fn toggling_choice_correctness_recomputes_the_rule() {
    init_tracing();
    let mut doc = multiple_choice_activity();

    // author marks c2 correct instead of c1
    let correct = ["c2"];
    let incorrect = ["c1", "c3"];
    let rule = create_rule_for_ids(&correct, &incorrect);
    scribe_doc::apply(
        &mut doc,
        &scribe_doc::Operation::replace("$..responses[?(@.id=='r1')].rule", json!(rule)),
    )
    .unwrap();

    let stored = responses::get_correct_response(&doc, "p1").unwrap();
    assert_eq!(
        stored["rule"],
        "(!(input like {c3})) && ((!(input like {c1})) && (input like {c2}))"
    );
}

#[test]
fn removing_a_choice_and_undoing_it() {
    init_tracing();
    let mut doc = multiple_choice_activity();
    let original_choices = doc["choices"].clone();

    let undo = choices::remove_one(&mut doc, "c2").unwrap();
    let ids: Vec<String> = choices::get_all(&doc)
        .unwrap()
        .iter()
        .filter_map(entity_id)
        .collect();
    assert_eq!(ids, ["c1", "c3"]);
    assert_eq!(undo.label, "Removed a choice");

    scribe_doc::apply_all(&mut doc, &undo.operations).unwrap();
    assert_eq!(doc["choices"], original_choices);
}

#[test]
fn hint_ladder_edits_are_scoped_to_their_part() {
    init_tracing();
    let mut doc = multi_part_activity();

    hints::add_cognitive(&mut doc, "p2", json!({ "id": "h9", "content": [] })).unwrap();

    let p2_ids: Vec<String> = hints::by_part(&doc, "p2")
        .unwrap()
        .iter()
        .filter_map(entity_id)
        .collect();
    assert_eq!(p2_ids, ["h2", "h9", "h3"]);

    // the other part is untouched
    let p1_ids: Vec<String> = hints::by_part(&doc, "p1")
        .unwrap()
        .iter()
        .filter_map(entity_id)
        .collect();
    assert_eq!(p1_ids, ["h1"]);
}

#[test]
fn removing_a_response_keeps_the_catch_all_reachable() {
    init_tracing();
    let mut doc = multi_part_activity();

    responses::remove_one(&mut doc, "p2", "r4").unwrap();

    let incorrect = responses::get_incorrect_response(&doc, "p2").unwrap();
    assert!(is_catch_all_rule(incorrect["rule"].as_str().unwrap()));
    assert_eq!(responses::get_correct_response(&doc, "p2").unwrap()["id"], "r3");
}

#[test]
fn targeted_feedback_survives_a_rule_rewrite() {
    init_tracing();
    let mut doc = multi_part_activity();

    // the targeted response must track the current choice set
    let rule = create_rule_for_ids(&["c2"], &["c1"]);
    scribe_doc::apply(
        &mut doc,
        &scribe_doc::Operation::replace("$..responses[?(@.id=='r4')].rule", json!(rule)),
    )
    .unwrap();

    let mappings = responses::targeted_mappings(&doc).unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(
        parse_text_input_from_rule(mappings[0].response["rule"].as_str().unwrap()).unwrap(),
        "c1"
    );
}

#[test]
fn stem_and_choice_content_round_trip_through_the_engine() {
    init_tracing();
    let doc = multiple_choice_activity();
    let stems = scribe_doc::find(&doc, "$.stem.content").unwrap();
    assert_eq!(stems.len(), 1);
    assert_eq!(stems[0]["children"][0]["text"], "Which of these?");
}
