use jsondom_core::{parse, parse_with, JsonError, Object, ParseOptions, SyntaxError, Value};

/// Helper: the (position, reason) of a parse failure, panicking on success.
fn malformed(input: &str) -> (usize, SyntaxError) {
    match parse(input) {
        Err(JsonError::MalformedJson { position, reason }) => (position, reason),
        other => panic!("expected MalformedJson for {input:?}, got {other:?}"),
    }
}

fn assert_malformed(input: &str) {
    let _ = malformed(input);
}

// ============================================================================
// Scalars (root-level)
// ============================================================================

#[test]
fn parse_null() {
    assert_eq!(parse("null").unwrap(), Value::Null);
}

#[test]
fn parse_booleans() {
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
}

#[test]
fn parse_integers() {
    assert_eq!(parse("0").unwrap(), Value::Int(0));
    assert_eq!(parse("42").unwrap(), Value::Int(42));
    assert_eq!(parse("-7").unwrap(), Value::Int(-7));
    assert_eq!(parse("-0").unwrap(), Value::Int(0));
}

#[test]
fn parse_floats() {
    assert_eq!(parse("2.75").unwrap(), Value::Float(2.75));
    assert_eq!(parse("-0.5").unwrap(), Value::Float(-0.5));
    assert_eq!(parse("1.0").unwrap(), Value::Float(1.0));
}

#[test]
fn exponent_literals_are_floats() {
    assert_eq!(parse("1e2").unwrap(), Value::Float(100.0));
    assert_eq!(parse("2.5E-1").unwrap(), Value::Float(0.25));
    assert_eq!(parse("-1e+1").unwrap(), Value::Float(-10.0));
}

#[test]
fn parse_string() {
    assert_eq!(parse(r#""hello world""#).unwrap(), Value::from("hello world"));
    assert_eq!(parse(r#""""#).unwrap(), Value::from(""));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse(" \t\r\n 42 \n").unwrap(), Value::Int(42));
}

// ============================================================================
// Numeric boundaries
// ============================================================================

#[test]
fn max_i64_parses() {
    assert_eq!(parse("9223372036854775807").unwrap(), Value::Int(i64::MAX));
}

#[test]
fn min_i64_parses() {
    assert_eq!(parse("-9223372036854775808").unwrap(), Value::Int(i64::MIN));
}

#[test]
fn i64_overflow_is_an_error() {
    assert_eq!(
        malformed("9223372036854775808"),
        (0, SyntaxError::IntegerOverflow)
    );
    assert_eq!(
        malformed("[1, -9223372036854775809]"),
        (4, SyntaxError::IntegerOverflow)
    );
}

#[test]
fn huge_float_is_out_of_range() {
    assert_eq!(malformed("1e400"), (0, SyntaxError::NumberOutOfRange));
}

#[test]
fn malformed_numbers() {
    for bad in ["01", "1.", ".5", "-", "1e", "1.2.3", "1-2", "--1"] {
        let input = format!("[{bad}]");
        let (_, reason) = malformed(&input);
        assert!(
            matches!(reason, SyntaxError::InvalidNumber | SyntaxError::UnexpectedChar(_)),
            "{input}: {reason:?}"
        );
    }
}

#[test]
fn plus_sign_is_not_a_number_start() {
    assert_eq!(malformed("+1"), (0, SyntaxError::UnexpectedChar('+')));
}

// ============================================================================
// Strings and escapes
// ============================================================================

#[test]
fn recognized_escapes() {
    let v = parse(r#""a\\b\"c\bd\fe\nf\rg\th""#).unwrap();
    assert_eq!(v, Value::from("a\\b\"c\u{8}d\u{c}e\nf\rg\th"));
}

#[test]
fn unknown_escape_is_an_error() {
    assert_eq!(malformed(r#""\x""#), (1, SyntaxError::InvalidEscape('x')));
    assert_eq!(malformed(r#"{"k":"\a"}"#), (6, SyntaxError::InvalidEscape('a')));
}

#[test]
fn unicode_escape_extension() {
    assert_eq!(parse(r#""\u0041\u00DF""#).unwrap(), Value::from("A\u{df}"));
    assert_eq!(parse(r#""\ud834\udd1e""#).unwrap(), Value::from("\u{1d11e}"));
}

#[test]
fn non_ascii_text_passes_through() {
    assert_eq!(parse(r#""日本語 café""#).unwrap(), Value::from("日本語 café"));
}

#[test]
fn unterminated_string() {
    assert_eq!(malformed(r#""abc"#), (0, SyntaxError::UnterminatedString));
    assert_eq!(malformed(r#"["a", "b"#), (6, SyntaxError::UnterminatedString));
}

#[test]
fn brackets_inside_strings_are_inert() {
    let v = parse(r#"{"a":"}{][","b":"\"{"}"#).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.get_str("a").unwrap(), "}{][");
    assert_eq!(obj.get_str("b").unwrap(), "\"{");
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn parse_flat_object() {
    let v = parse(r#"{"name": "Alice", "age": 30, "ok": true, "none": null}"#).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj.get_str("name").unwrap(), "Alice");
    assert_eq!(obj.get_i64("age").unwrap(), 30);
    assert!(obj.get_bool("ok").unwrap());
    assert!(obj.get("none").unwrap().is_null());
}

#[test]
fn object_keeps_source_order() {
    let v = parse(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    let keys: Vec<&str> = v.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_last_write_wins() {
    let v = parse(r#"{"a":1,"b":0,"a":2}"#).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a").unwrap(), &Value::Int(2));
    // the first occurrence fixes the slot
    assert_eq!(obj.keys().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn empty_object_with_whitespace() {
    let v = parse("{ \n }").unwrap();
    assert_eq!(v, Value::Object(Object::new()));
}

#[test]
fn object_structure_errors() {
    assert_eq!(malformed(r#"{"a":}"#), (5, SyntaxError::UnexpectedChar('}')));
    assert_eq!(malformed(r#"{"a":1,}"#), (7, SyntaxError::UnexpectedChar('}')));
    assert_eq!(malformed(r#"{"a" 1}"#), (5, SyntaxError::UnexpectedChar('1')));
    assert_eq!(malformed(r#"{"a":1 "b":2}"#), (7, SyntaxError::UnexpectedChar('"')));
    assert_eq!(malformed(r#"{1:2}"#), (1, SyntaxError::UnexpectedChar('1')));
    assert_eq!(malformed(r#"{"a":1"#), (6, SyntaxError::UnexpectedEnd));
    assert_eq!(malformed(r#"{"a":1]"#), (6, SyntaxError::UnexpectedChar(']')));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn parse_mixed_array() {
    let v = parse(r#"[1, 2.5, "three", true, null, [], {}]"#).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 7);
    assert_eq!(arr.get(0).unwrap(), &Value::Int(1));
    assert_eq!(arr.get(1).unwrap(), &Value::Float(2.5));
    assert_eq!(arr.get_str(2).unwrap(), "three");
    assert!(arr.is_null(4).unwrap());
    assert!(arr.get_array(5).unwrap().is_empty());
    assert!(arr.get_object(6).unwrap().is_empty());
}

#[test]
fn array_structure_errors() {
    assert_eq!(malformed("[1,2,"), (5, SyntaxError::UnexpectedEnd));
    assert_eq!(malformed("[1,2,]"), (5, SyntaxError::UnexpectedChar(']')));
    assert_eq!(malformed("[,1]"), (1, SyntaxError::UnexpectedChar(',')));
    assert_eq!(malformed("[1 2]"), (3, SyntaxError::UnexpectedChar('2')));
    assert_eq!(malformed("[1}"), (2, SyntaxError::UnexpectedChar('}')));
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn triple_nested_objects() {
    let v = parse(r#"{"a":{"b":{"c":1}}}"#).unwrap();
    assert_eq!(v.get("a").unwrap().get("b").unwrap().get("c").unwrap(), &Value::Int(1));
}

#[test]
fn triple_nested_arrays() {
    let v = parse("[[[1,2],[3]],[[4]]]").unwrap();
    assert_eq!(v.get(0).unwrap().get(1).unwrap().get(0).unwrap(), &Value::Int(3));
    assert_eq!(v.get(1).unwrap().get(0).unwrap().get(0).unwrap(), &Value::Int(4));
}

#[test]
fn sibling_nested_containers() {
    let v = parse(r#"{"x":{"y":{"z":[1,{"w":[]}]}},"after":{"k":{"j":2}}}"#).unwrap();
    assert_eq!(
        v.get("after").unwrap().get("k").unwrap().get("j").unwrap(),
        &Value::Int(2)
    );
    let inner = v.get("x").unwrap().get("y").unwrap().get("z").unwrap();
    assert!(inner.get(1).unwrap().get("w").unwrap().is_empty());
}

#[test]
fn deep_nesting_up_to_the_limit() {
    let depth = 128;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&text).is_ok());

    let too_deep = format!("{}{}", "[".repeat(depth + 1), "]".repeat(depth + 1));
    assert_eq!(
        malformed(&too_deep),
        (depth, SyntaxError::NestingTooDeep(depth))
    );
}

#[test]
fn custom_depth_limit() {
    let opts = ParseOptions::default().with_max_depth(3);
    assert!(parse_with(r#"{"a":{"b":{"c":1}}}"#, &opts).is_ok());
    assert!(parse_with(r#"{"a":{"b":{"c":{}}}}"#, &opts).is_err());
}

// ============================================================================
// Top-level text
// ============================================================================

#[test]
fn trailing_garbage_is_rejected() {
    assert_eq!(malformed("{} x"), (3, SyntaxError::TrailingCharacters));
    assert_eq!(malformed("[1][2]"), (3, SyntaxError::TrailingCharacters));
    assert_eq!(malformed("1 2"), (2, SyntaxError::TrailingCharacters));
}

#[test]
fn leading_garbage_is_rejected() {
    assert_eq!(malformed("x{}"), (0, SyntaxError::UnexpectedChar('x')));
}

#[test]
fn empty_text_is_rejected() {
    assert_eq!(malformed(""), (0, SyntaxError::UnexpectedEnd));
}

#[test]
fn non_standard_tokens_are_rejected() {
    for bad in ["NaN", "Infinity", "-Infinity", "undefined", "[True]", "{'a':1}"] {
        assert_malformed(bad);
    }
}

#[test]
fn comments_and_trailing_commas_are_rejected() {
    assert_malformed("[1, /* two */ 2]");
    assert_malformed("// c\n[]");
    assert_malformed("[1,]");
}

#[test]
fn strict_options_need_a_container_root() {
    let strict = ParseOptions::strict();
    assert!(parse_with(r#"{"a":[1]}"#, &strict).is_ok());
    assert!(parse_with("[1]", &strict).is_ok());
    assert!(parse_with("\"s\"", &strict).is_err());
    assert!(parse_with("null", &strict).is_err());
}

#[test]
fn object_and_array_from_str_check_the_root() {
    let obj: Object = r#"{"a":1}"#.parse().unwrap();
    assert_eq!(obj.get_i64("a").unwrap(), 1);

    let err = "[1]".parse::<Object>().unwrap_err();
    assert_eq!(
        err,
        JsonError::MalformedJson {
            position: 0,
            reason: SyntaxError::ExpectedObject
        }
    );

    let arr: jsondom_core::Array = "[1,2]".parse().unwrap();
    assert_eq!(arr.len(), 2);
    assert!("{}".parse::<jsondom_core::Array>().is_err());
}

#[test]
fn error_message_is_readable() {
    let err = parse(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed JSON at position 5: unexpected character '1'"
    );
}
