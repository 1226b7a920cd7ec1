//! JSON codec conformance tests.
//!
//! Covers the sanitizing pre-pass, the structural parser's error taxonomy,
//! and re-parsing of serializer output.

use dynvar::json::{parse, parse_json, parse_with_limits, sanitize, to_json, to_json_compact};
use dynvar::{Kind, Limits, ParseError, Value};
use rstest::rstest;

// ============================================================================
// Sanitization
// ============================================================================

#[rstest]
#[case(" { \"a\" : 1 } ")]
#[case("[\n\t1,\r\n\t2\n]")]
#[case("\"keep   inner   space\"")]
#[case("{\"x\": [true, false, null], \"y\": \"a b\"}")]
fn sanitize_is_idempotent(#[case] input: &str) {
    let once = sanitize(input, &Limits::default()).unwrap();
    let twice = sanitize(&once, &Limits::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn sanitize_drops_control_bytes_outside_strings() {
    let once = sanitize("[1,\u{1}\u{7f}2]", &Limits::default()).unwrap();
    assert_eq!(once, "[1,\u{7f}2]");
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[rstest]
#[case("", 100)] // empty input
#[case("   ", 100)]
#[case("\"abc", 101)] // unterminated string
#[case("[1,2", 102)] // unterminated container
#[case("{\"a\":[1}", 103)] // mismatched bracket
#[case("1]", 103)] // stray bracket
#[case("{a:1}", 105)] // invalid label
#[case("{\"a\" 1}", 106)] // missing colon
#[case("{\"a\":1,}", 107)] // trailing stray token
#[case("[1]2", 107)]
#[case("[,]", 108)] // invalid token
#[case("[1,", 102)]
#[case("tru", 110)] // invalid literal
#[case("[nulx]", 110)]
#[case("1.2.3", 111)] // malformed number
fn error_codes(#[case] input: &str, #[case] code: u32) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.code(), code, "input {input:?} gave {err}");
}

#[test]
fn errors_name_their_position() {
    let err = parse("{\"a\":1,}").unwrap_err();
    assert_eq!(err.to_string(), "JSON: unexpected token '}' at position: 7");
}

#[test]
fn parse_json_returns_error_values() {
    for input in ["", "[1,2", "{\"a\":1,}"] {
        let v = parse_json(input);
        assert_eq!(v.kind(), Kind::Error, "input {input:?}");
        assert!(v.error_message().unwrap().starts_with("JSON: "));
    }
}

#[test]
fn nesting_limit_reported() {
    let deep = format!("{}{}", "[".repeat(129), "]".repeat(129));
    assert!(matches!(
        parse(&deep),
        Err(ParseError::NestingTooDeep {
            depth: 129,
            limit: 128
        })
    ));
    assert!(parse_with_limits(&deep, Limits::relaxed()).is_ok());

    let at_limit = format!("{}{}", "[".repeat(128), "]".repeat(128));
    assert!(parse(&at_limit).is_ok());
}

// ============================================================================
// Accepted documents
// ============================================================================

#[test]
fn index_into_parsed_documents() {
    assert_eq!(parse_json("[1,2,3]")[1].to_int(), 2);
    assert!(parse_json("{\"x\":true}")["x"].to_bool());
}

#[test]
fn number_kinds() {
    let v = parse("[0, 7, -7, 1.25, -0.5]").unwrap();
    let kinds: Vec<Kind> = v.as_array().unwrap().iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![Kind::UInt, Kind::UInt, Kind::Int, Kind::Float, Kind::Float]
    );
}

#[test]
fn mixed_document() {
    let v = parse(
        r#"
        {
            "name": "widget",
            "tags": ["a", "b"],
            "dims": {"w": 3, "h": -4},
            "active": true,
            "parent": null
        }
        "#,
    )
    .unwrap();
    assert_eq!(v.size(), 5);
    assert_eq!(v["name"].as_str(), Some("widget"));
    assert_eq!(v["tags"][1], Value::from("b"));
    assert_eq!(v["dims"]["h"].to_int(), -4);
    assert!(v["parent"].is_null());
}

// ============================================================================
// Serializer output re-parses
// ============================================================================

fn sample_tree() -> Value {
    let mut v = Value::Null;
    v["null"] = Value::Null;
    v["yes"] = Value::from(true);
    v["count"] = Value::from(12u32);
    v["delta"] = Value::from(-3);
    v["label"] = Value::from("hello world");
    v["list"] = Value::from([Value::from(1u8), Value::from("two"), Value::Null]);
    v["nested"]["deeper"]["list"][2] = Value::from(false);
    v["empty_map"] = Value::new(Kind::Map);
    v["empty_list"] = Value::new(Kind::Array);
    v
}

#[test]
fn pretty_output_reparses_to_same_tree() {
    let v = sample_tree();
    assert_eq!(parse_with_limits(&to_json(&v), Limits::relaxed()).unwrap(), v);
}

#[test]
fn compact_output_reparses_to_same_tree() {
    let v = sample_tree();
    assert_eq!(parse(&to_json_compact(&v)).unwrap(), v);
}

#[test]
fn compact_output_is_standard_json() {
    let v = sample_tree();
    let reference: serde_json::Value = serde_json::from_str(&to_json_compact(&v)).unwrap();
    assert_eq!(reference["nested"]["deeper"]["list"][2], serde_json::json!(false));
    assert_eq!(reference["delta"], serde_json::json!(-3));
    assert_eq!(reference["list"][1], serde_json::json!("two"));
}

#[test]
fn pretty_output_is_standard_json() {
    let v = sample_tree();
    let reference: serde_json::Value = serde_json::from_str(&to_json(&v)).unwrap();
    assert_eq!(reference["count"], serde_json::json!(12));
}
