//! Built-in value renderer output.

use linefmt::{Inspector, ValueRenderer, strip};
use serde_json::{Value, json};

fn render(value: &Value) -> String {
    strip(&Inspector::new().render(value, 2).unwrap())
}

#[test]
fn scalars() {
    assert_eq!(render(&json!(null)), "null");
    assert_eq!(render(&json!(true)), "true");
    assert_eq!(render(&json!(false)), "false");
    assert_eq!(render(&json!(3)), "3");
    assert_eq!(render(&json!(-61)), "-61");
    assert_eq!(render(&json!(3.5)), "3.5");
    assert_eq!(render(&json!("hi")), "'hi'");
}

#[test]
fn scalar_colors() {
    let inspector = Inspector::new();
    assert_eq!(inspector.render(&json!(null), 2).unwrap(), "\x1b[1mnull\x1b[22m");
    assert_eq!(inspector.render(&json!(true), 2).unwrap(), "\x1b[33mtrue\x1b[39m");
    assert_eq!(inspector.render(&json!(7), 2).unwrap(), "\x1b[33m7\x1b[39m");
    assert_eq!(inspector.render(&json!("hi"), 2).unwrap(), "\x1b[32m'hi'\x1b[39m");
}

#[test]
fn short_containers_stay_on_one_line() {
    assert_eq!(render(&json!({"a": 1, "b": "two"})), "{ a: 1, b: 'two' }");
    assert_eq!(render(&json!([1, 2, 3])), "[ 1, 2, 3 ]");
    assert_eq!(render(&json!([{"a": 1}])), "[ { a: 1 } ]");
}

#[test]
fn empty_containers() {
    assert_eq!(render(&json!({})), "{}");
    assert_eq!(render(&json!([])), "[]");
    assert_eq!(render(&json!({"a": {}, "b": []})), "{ a: {}, b: [] }");
}

#[test]
fn wide_container_breaks_into_hung_block() {
    let value = json!({
        "first_field": "a long string value",
        "second_field": "another long string value",
    });
    assert_eq!(
        render(&value),
        "{ first_field: 'a long string value',\n  second_field: 'another long string value' }"
    );
}

#[test]
fn wide_container_with_short_nested_object() {
    let value = json!({
        "alpha": {"code": "ECONNREFUSED", "errno": -61},
        "beta": "retry scheduled for later today",
    });
    assert_eq!(
        render(&value),
        "{ alpha: { code: 'ECONNREFUSED', errno: -61 },\n  beta: 'retry scheduled for later today' }"
    );
}

#[test]
fn nested_multiline_entries_gain_continuation_indent() {
    let value = json!({
        "wrap": {
            "message_text": "a fairly long message body here",
            "second_text": "another fairly long body",
        },
    });
    assert_eq!(
        render(&value),
        "{ wrap: { message_text: 'a fairly long message body here',\
         \n    second_text: 'another fairly long body' } }"
    );
}

#[test]
fn depth_placeholders_for_deep_containers() {
    let inspector = Inspector::new();
    let flat = |value: &Value, depth| strip(&inspector.render(value, depth).unwrap());

    assert_eq!(flat(&json!({"a": {"b": 1}}), 0), "{ a: [Object] }");
    assert_eq!(flat(&json!({"a": [1]}), 0), "{ a: [Array] }");
    assert_eq!(flat(&json!([[1]]), 0), "[ [Array] ]");
    assert_eq!(flat(&json!({"a": {"b": 1}}), 1), "{ a: { b: 1 } }");
}

#[test]
fn empty_containers_render_brackets_at_any_depth() {
    let inspector = Inspector::new();
    let out = strip(&inspector.render(&json!({"a": {}, "b": []}), 0).unwrap());
    assert_eq!(out, "{ a: {}, b: [] }");
}

#[test]
fn placeholders_are_cyan() {
    let inspector = Inspector::new();
    let out = inspector.render(&json!({"a": {"b": 1}}), 0).unwrap();
    assert!(out.contains("\x1b[36m[Object]\x1b[39m"));
}

#[test]
fn long_arrays_truncate_with_marker() {
    let items: Vec<Value> = (0..120).map(Value::from).collect();
    let out = render(&Value::Array(items));
    assert!(out.contains("99"));
    assert!(out.ends_with("... 20 more items ]"));
}

#[test]
fn max_items_is_adjustable() {
    let inspector = Inspector::new().max_items(2);
    let out = strip(&inspector.render(&json!([1, 2, 3, 4]), 2).unwrap());
    assert_eq!(out, "[ 1, 2, ... 2 more items ]");
}

#[test]
fn truncation_marker_is_singular_for_one_item() {
    let inspector = Inspector::new().max_items(3);
    let out = strip(&inspector.render(&json!([1, 2, 3, 4]), 2).unwrap());
    assert_eq!(out, "[ 1, 2, 3, ... 1 more item ]");
}

#[test]
fn line_budget_is_adjustable() {
    let inspector = Inspector::new().line_budget(10);
    let out = strip(&inspector.render(&json!({"ab": 1, "cd": 2}), 2).unwrap());
    assert_eq!(out, "{ ab: 1,\n  cd: 2 }");
}

#[test]
fn strings_escape_quotes_and_breaks() {
    assert_eq!(
        render(&json!("it's a \"test\"\nnewline")),
        "'it\\'s a \"test\"\\nnewline'"
    );
    assert_eq!(render(&json!("tab\there")), "'tab\\there'");
}

#[test]
fn non_identifier_keys_are_quoted() {
    assert_eq!(render(&json!({"weird key": 1})), "{ 'weird key': 1 }");
    assert_eq!(render(&json!({"9lives": 1})), "{ '9lives': 1 }");
    assert_eq!(
        render(&json!({"$id": 1, "_x": 2, "ok9": 3})),
        "{ $id: 1, _x: 2, ok9: 3 }"
    );
}

#[test]
fn object_keys_render_alphabetically() {
    let mut map = serde_json::Map::new();
    map.insert("zebra".to_string(), json!(1));
    map.insert("apple".to_string(), json!(2));
    assert_eq!(render(&Value::Object(map)), "{ apple: 2, zebra: 1 }");
}
