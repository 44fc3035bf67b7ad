use json_access::{equal, equal_with, value, ArrayOrder, CompareOptions, ObjectMatch, Value};

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn test_reordered_documents() {
    let a = parse(
        r#"{
            "foo" : {
                "bar" : {
                    "boo" : []
                },
                "baz" : 3
            },
            "woof" : true
        }"#,
    );
    let b = parse(
        r#"{
            "foo" : {
                "baz" : 3,
                "bar" : {
                    "boo" : []
                }
            },
            "woof" : true
        }"#,
    );
    assert!(equal(&a, &b));
    assert!(equal(&b, &a));
}

#[test]
fn test_reflexive_nested() {
    let doc = parse(
        r#"{"a": [1, {"b": [null, "x", 2.5]}, [[], {}]], "c": {"d": {"e": false}}}"#,
    );
    assert!(equal(&doc, &doc));
    assert!(equal(&doc, &json_access::copy_from(&doc)));
}

#[test]
fn test_member_order_is_irrelevant() {
    assert!(equal(&parse(r#"{"a":1,"b":2}"#), &parse(r#"{"b":2,"a":1}"#)));
}

#[test]
fn test_member_sets_must_match() {
    let small = parse(r#"{"a":1}"#);
    let large = parse(r#"{"a":1,"b":2}"#);
    assert!(!equal(&small, &large));
    assert!(!equal(&large, &small));
    assert!(!equal(&parse(r#"{"a":1}"#), &parse(r#"{"b":1}"#)));
    assert!(!equal(&parse(r#"{"a":1}"#), &parse(r#"{"a":2}"#)));
}

#[test]
fn test_empty_objects() {
    assert!(equal(&parse("{}"), &parse("{}")));
    assert!(!equal(&parse("{}"), &parse(r#"{"a":null}"#)));
    assert!(!equal(&parse(r#"{"a":null}"#), &parse("{}")));
}

#[test]
fn test_arrays_are_multisets() {
    assert!(equal(&parse("[1,2,3]"), &parse("[3,2,1]")));
    assert!(!equal(&parse("[1,1,2]"), &parse("[1,2,2]")));
    assert!(!equal(&parse("[1,2,2]"), &parse("[1,1,2]")));
    assert!(equal(&parse(r#"["a",1,null,true]"#), &parse(r#"[true,null,1,"a"]"#)));
}

#[test]
fn test_empty_arrays() {
    assert!(equal(&parse("[]"), &parse("[]")));
    assert!(!equal(&parse("[]"), &parse("[1]")));
    assert!(!equal(&parse("[1]"), &parse("[]")));
}

#[test]
fn test_array_lengths_must_match() {
    assert!(!equal(&parse("[1,2]"), &parse("[1,2,2]")));
}

#[test]
fn test_nested_arrays_consume_matches() {
    let a = parse(r#"[{"k":1},{"k":1},{"k":2}]"#);
    let b = parse(r#"[{"k":2},{"k":2},{"k":1}]"#);
    assert!(!equal(&a, &b));

    let c = parse(r#"[{"k":2},{"k":1},{"k":1}]"#);
    assert!(equal(&a, &c));
}

#[test]
fn test_deeply_nested_order_independence() {
    let a = parse(r#"[[1,[2,3]],{"x":[{"y":[4,5]}]}]"#);
    let b = parse(r#"[{"x":[{"y":[5,4]}]},[[3,2],1]]"#);
    assert!(equal(&a, &b));
}

#[test]
fn test_cross_type_scalars() {
    assert!(!equal(&Value::from(3), &Value::from("3")));
    assert!(!equal(&Value::from(true), &Value::from(1)));
    assert!(!equal(&Value::from(false), &Value::Null));
    assert!(!equal(&Value::Null, &Value::from(false)));
    assert!(!equal(&Value::from(1), &Value::from(1.0)));
    assert!(!equal(&Value::from(1.0f32), &Value::from(1.0f64)));
}

#[test]
fn test_shape_mismatch() {
    assert!(!equal(&parse("{}"), &parse("[]")));
    assert!(!equal(&parse("[]"), &parse("{}")));
    assert!(!equal(&parse("[1]"), &Value::from(1)));
    assert!(!equal(&Value::from("a"), &parse(r#"["a"]"#)));
}

#[test]
fn test_strings_compare_bytewise() {
    assert!(equal(&Value::from("héllo"), &Value::from("héllo")));
    assert!(!equal(&Value::from("hello"), &Value::from("Hello")));
}

#[test]
fn test_subset_objects() {
    let options = CompareOptions::subset();
    let small = parse(r#"{"a":{"x":1}}"#);
    let large = parse(r#"{"a":{"x":1,"y":2},"b":true}"#);
    assert!(equal_with(&small, &large, &options));
    assert!(!equal_with(&large, &small, &options));
    assert!(equal_with(&parse("{}"), &parse("{}"), &options));
    assert!(!equal_with(&parse("{}"), &large, &options));
}

#[test]
fn test_subset_still_requires_members() {
    let options = CompareOptions::new().with_objects(ObjectMatch::Subset);
    assert!(!equal_with(&parse(r#"{"a":1}"#), &parse(r#"{"b":1}"#), &options));
}

#[test]
fn test_positional_arrays() {
    let options = CompareOptions::new().with_arrays(ArrayOrder::Positional);
    assert!(equal_with(&parse("[1,2,3]"), &parse("[1,2,3]"), &options));
    assert!(!equal_with(&parse("[1,2,3]"), &parse("[3,2,1]"), &options));
    assert!(equal_with(
        &parse(r#"[{"a":1,"b":2}]"#),
        &parse(r#"[{"b":2,"a":1}]"#),
        &options
    ));
}

#[test]
fn test_deep_eq_method() {
    let a = value!({ "list": [1, 2], "flag": true });
    let b = value!({ "flag": true, "list": [2, 1] });
    assert!(a.deep_eq(&b));
    assert_ne!(a, b);
}
