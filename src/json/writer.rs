//! JSON serialization of Value trees.
//!
//! [`to_json`] uses the same layout as `Display` (tab-indented Map blocks,
//! `[a, b]` arrays) but quotes text so the output parses back. [`to_json_compact`]
//! drops all insignificant whitespace.
//!
//! String contents are written verbatim, mirroring the parser, which keeps
//! escape sequences undecoded. Char and Error payloads are written as
//! strings and non-finite floats as `null`.

use crate::value::display::float_text;
use crate::value::{Map, Value};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Tab-indented Map blocks, `, ` between array elements
    #[default]
    Pretty,
    /// No insignificant whitespace
    Compact,
}

/// Serialize a Value to pretty JSON text.
pub fn to_json(value: &Value) -> String {
    to_json_with_style(value, Style::Pretty)
}

/// Serialize a Value to compact JSON text.
pub fn to_json_compact(value: &Value) -> String {
    to_json_with_style(value, Style::Compact)
}

/// Serialize a Value in the given style.
pub fn to_json_with_style(value: &Value, style: Style) -> String {
    let mut output = String::new();
    serialize_value(value, style, 0, &mut output);
    output
}

/// `depth` counts enclosing Map blocks and sets the pretty indentation.
fn serialize_value(value: &Value, style: Style, depth: usize, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Int(i) => output.push_str(&i.to_string()),
        Value::UInt(u) => output.push_str(&u.to_string()),
        Value::Float(f) if f.is_finite() => output.push_str(&float_text(*f)),
        Value::Float(_) => output.push_str("null"),
        Value::Char(c) => serialize_string(&char::from(*c).to_string(), output),
        Value::String(s) | Value::Error(s) => serialize_string(s, output),
        Value::Array(arr) => serialize_array(arr, style, depth, output),
        Value::Map(map) => serialize_map(map, style, depth, output),
    }
}

fn serialize_string(s: &str, output: &mut String) {
    output.push('"');
    output.push_str(s);
    output.push('"');
}

fn serialize_array(arr: &[Value], style: Style, depth: usize, output: &mut String) {
    let separator = match style {
        Style::Pretty => ", ",
        Style::Compact => ",",
    };
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push_str(separator);
        }
        serialize_value(value, style, depth, output);
    }
    output.push(']');
}

fn serialize_map(map: &Map, style: Style, depth: usize, output: &mut String) {
    if style == Style::Compact {
        output.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            serialize_string(key, output);
            output.push(':');
            serialize_value(value, style, depth, output);
        }
        output.push('}');
        return;
    }

    output.push_str("{\n");
    let last = map.len().saturating_sub(1);
    for (i, (key, value)) in map.iter().enumerate() {
        push_tabs(depth + 1, output);
        serialize_string(key, output);
        output.push_str(": ");
        serialize_value(value, style, depth + 1, output);
        if i < last {
            output.push(',');
        }
        output.push('\n');
    }
    push_tabs(depth, output);
    output.push('}');
}

fn push_tabs(count: usize, output: &mut String) {
    output.extend(std::iter::repeat('\t').take(count));
}
