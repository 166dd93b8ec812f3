//! `Value` tree → compact JSON text.
//!
//! Output has no inserted whitespace. Objects are written in insertion order,
//! so `parse` followed by `serialize` keeps key order stable.
//!
//! - Strings escape `\`, `"`, tab, backspace, form feed, newline, and carriage
//!   return. Every other character, including other control characters and
//!   non-ASCII text, is written verbatim.
//! - Floats use the shortest representation that parses back to the same
//!   `f64`, and always carry a `.` or an exponent so they re-parse as `Float`
//!   rather than `Int`.
//! - Non-finite floats have no JSON spelling and are written as `null`.
//!
//! # Example
//! ```
//! use jsondom_core::{serialize, Object, Value};
//!
//! let mut obj = Object::new();
//! obj.put("name", "Alice").put("ratio", 1.0).put("tags", vec!["a", "b"]);
//! assert_eq!(serialize(&Value::from(obj)), r#"{"name":"Alice","ratio":1.0,"tags":["a","b"]}"#);
//! ```

use crate::array::Array;
use crate::object::Object;
use crate::value::Value;

/// Serialize a value tree to compact JSON text. Never fails.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    serialize_into(value, &mut out);
    out
}

/// Append the compact JSON text for `value` to `out`.
pub fn serialize_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => write_float(*f, out),
        Value::String(s) => write_string(s, out),
        Value::Object(obj) => write_object(obj, out),
        Value::Array(arr) => write_array(arr, out),
    }
}

pub(crate) fn write_object(obj: &Object, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        serialize_into(value, out);
    }
    out.push('}');
}

pub(crate) fn write_array(arr: &Array, out: &mut String) {
    out.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        serialize_into(value, out);
    }
    out.push(']');
}

fn write_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn write_float(f: f64, out: &mut String) {
    if !f.is_finite() {
        out.push_str("null");
        return;
    }
    // Debug formatting is the shortest round-trip form ("1.0", "1e300", "1e-7").
    let text = format!("{f:?}");
    out.push_str(&text);
    if !text.contains(['.', 'e', 'E']) {
        out.push_str(".0");
    }
}
