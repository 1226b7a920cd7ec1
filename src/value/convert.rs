//! Construction from native types and total scalar coercions.
//!
//! The `to_*` accessors never fail. Kinds without a sensible numeric reading
//! (Null, Error, Array, Map) coerce to zero or false, and a String whose text
//! does not start with a numeral coerces to zero as well.

use super::types::{Map, Value};

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::UInt(v as u64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// ASCII characters become Char; anything wider does not fit a byte and is
/// kept as a one-character String.
impl From<char> for Value {
    fn from(v: char) -> Self {
        if v.is_ascii() {
            Value::Char(v as u8)
        } else {
            Value::String(v.to_string())
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl<const N: usize> From<[Value; N]> for Value {
    fn from(v: [Value; N]) -> Self {
        Value::Array(v.into())
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

/// Longest leading slice of `s` that reads as a numeral, after leading
/// whitespace. With `fraction` set, a fractional part and exponent are
/// accepted too.
fn numeral_prefix(s: &str, fraction: bool) -> &str {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    end = digits_from(end);

    if fraction {
        if bytes.get(end) == Some(&b'.') {
            end = digits_from(end + 1);
        }
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_end = digits_from(exp);
            if exp_end > exp {
                end = exp_end;
            }
        }
    }

    &s[..end]
}

fn parse_int(s: &str) -> i64 {
    numeral_prefix(s, false).parse().unwrap_or(0)
}

fn parse_uint(s: &str) -> u64 {
    let prefix = numeral_prefix(s, false);
    if prefix.starts_with('-') {
        // Negative text wraps, as an unsigned reading of a signed numeral does.
        prefix.parse::<i64>().map(|v| v as u64).unwrap_or(0)
    } else {
        prefix.parse().unwrap_or(0)
    }
}

fn parse_double(s: &str) -> f64 {
    numeral_prefix(s, true).parse().unwrap_or(0.0)
}

impl Value {
    /// Coerce to a signed integer.
    pub fn to_int(&self) -> i64 {
        match self {
            Value::Int(i) => *i,
            Value::UInt(u) => *u as i64,
            Value::Float(f) => *f as i64,
            Value::Char(c) => i64::from(*c),
            Value::Bool(b) => i64::from(*b),
            Value::String(s) => parse_int(s),
            Value::Null | Value::Error(_) | Value::Array(_) | Value::Map(_) => 0,
        }
    }

    /// Coerce to an unsigned integer.
    pub fn to_uint(&self) -> u64 {
        match self {
            Value::Int(i) => *i as u64,
            Value::UInt(u) => *u,
            Value::Float(f) => *f as u64,
            Value::Char(c) => u64::from(*c),
            Value::Bool(b) => u64::from(*b),
            Value::String(s) => parse_uint(s),
            Value::Null | Value::Error(_) | Value::Array(_) | Value::Map(_) => 0,
        }
    }

    /// Coerce to a double.
    pub fn to_double(&self) -> f64 {
        match self {
            Value::Int(i) => *i as f64,
            Value::UInt(u) => *u as f64,
            Value::Float(f) => *f,
            Value::Char(c) => f64::from(*c),
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::String(s) => parse_double(s),
            Value::Null | Value::Error(_) | Value::Array(_) | Value::Map(_) => 0.0,
        }
    }

    /// Coerce to a single byte. A String yields its first byte.
    pub fn to_char(&self) -> u8 {
        match self {
            Value::Int(i) => *i as u8,
            Value::UInt(u) => *u as u8,
            Value::Float(f) => *f as u8,
            Value::Char(c) => *c,
            Value::Bool(b) => u8::from(*b),
            Value::String(s) => s.as_bytes().first().copied().unwrap_or(0),
            Value::Null | Value::Error(_) | Value::Array(_) | Value::Map(_) => 0,
        }
    }

    /// Coerce to a boolean. A String is true when non-empty.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::UInt(u) => *u != 0,
            Value::Float(f) => *f != 0.0,
            Value::Char(c) => *c != 0,
            Value::Bool(b) => *b,
            Value::String(s) => !s.is_empty(),
            Value::Null | Value::Error(_) | Value::Array(_) | Value::Map(_) => false,
        }
    }
}
