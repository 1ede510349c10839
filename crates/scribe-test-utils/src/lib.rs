//! Testing utilities for the scribe workspace
//!
//! Shared document fixtures and tracing setup. Fixture ids are fixed, not
//! generated, so assertions can name them.

#![allow(missing_docs)]

use scribe_rules::{match_rule, CATCH_ALL};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honoring `RUST_LOG`; repeated calls are fine.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn paragraph(text: &str) -> Value {
    json!([ { "type": "p", "children": [ { "text": text } ] } ])
}

fn response(id: &str, rule: &str, score: f64, feedback: &str) -> Value {
    json!({
        "id": id,
        "rule": rule,
        "score": score,
        "feedback": { "id": format!("{id}-fb"), "content": paragraph(feedback) }
    })
}

fn hint(id: &str, text: &str) -> Value {
    json!({ "id": id, "content": paragraph(text) })
}

/// A single-part multiple-choice activity: three choices, a correct and a
/// catch-all response, a three-rung hint ladder, and the correct-ids
/// association pointing at choice `c1`.
pub fn multiple_choice_activity() -> Value {
    json!({
        "stem": { "id": "stem1", "content": paragraph("Which of these?") },
        "choices": [
            { "id": "c1", "content": paragraph("alpha") },
            { "id": "c2", "content": paragraph("beta") },
            { "id": "c3", "content": paragraph("gamma") }
        ],
        "authoring": {
            "parts": [ {
                "id": "p1",
                "responses": [
                    response("r1", &match_rule("c1"), 1.0, "Correct"),
                    response("r2", &match_rule(CATCH_ALL), 0.0, "Incorrect")
                ],
                "hints": [
                    hint("h1", "Read the stem again"),
                    hint("h2", "Rule out the odd one"),
                    hint("h3", "It is the first option")
                ]
            } ],
            "correct": [ ["c1"], "r1" ],
            "targeted": []
        }
    })
}

/// A two-part activity with targeted feedback on the second part.
pub fn multi_part_activity() -> Value {
    json!({
        "stem": { "id": "stem1", "content": paragraph("Fill both blanks") },
        "choices": [
            { "id": "c1", "content": paragraph("alpha") },
            { "id": "c2", "content": paragraph("beta") }
        ],
        "authoring": {
            "parts": [
                {
                    "id": "p1",
                    "responses": [
                        response("r1", &match_rule("c1"), 1.0, "Correct"),
                        response("r2", &match_rule(CATCH_ALL), 0.0, "Incorrect")
                    ],
                    "hints": [ hint("h1", "First blank first") ]
                },
                {
                    "id": "p2",
                    "responses": [
                        response("r3", &match_rule("c2"), 1.0, "Correct"),
                        response("r4", &match_rule("c1"), 0.0, "Almost"),
                        response("r5", &match_rule(CATCH_ALL), 0.0, "Incorrect")
                    ],
                    "hints": [
                        hint("h2", "Second blank differs"),
                        hint("h3", "It is beta")
                    ]
                }
            ],
            "correct": [ ["c1"], "r1" ],
            "targeted": [ [ ["c1"], "r4" ] ]
        }
    })
}
