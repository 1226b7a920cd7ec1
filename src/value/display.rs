//! Human-readable rendering.
//!
//! `Display` gives every value a `to_string()`. Scalars render as plain
//! text, String and Error verbatim, Arrays as `[a, b]` and Maps as a block:
//!
//! ```text
//! {
//! 	"key": value,
//! 	"nested": {
//! 		"x": 1
//! 	}
//! }
//! ```
//!
//! Nested renderings are re-indented by one tab per level.

use std::fmt;

use super::types::Value;

/// Float text with six fractional digits, independent of locale.
pub(crate) fn float_text(f: f64) -> String {
    format!("{f:.6}")
}

/// Append `text` to `out`, inserting a tab after every newline.
pub(crate) fn push_indented(out: &mut String, text: &str) {
    for ch in text.chars() {
        out.push(ch);
        if ch == '\n' {
            out.push('\t');
        }
    }
}

fn render(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::UInt(u) => out.push_str(&u.to_string()),
        Value::Float(f) => out.push_str(&float_text(*f)),
        Value::Char(c) => out.push(char::from(*c)),
        Value::String(s) | Value::Error(s) => out.push_str(s),
        Value::Array(arr) => {
            out.push('[');
            for (i, v) in arr.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render(v, out);
            }
            out.push(']');
        }
        Value::Map(map) => {
            out.push_str("{\n");
            let last = map.len().saturating_sub(1);
            for (i, (key, v)) in map.iter().enumerate() {
                out.push_str("\t\"");
                out.push_str(key);
                out.push_str("\": ");
                let mut nested = String::new();
                render(v, &mut nested);
                push_indented(out, &nested);
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push('}');
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        render(self, &mut out);
        f.write_str(&out)
    }
}
