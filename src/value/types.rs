//! The dynamic value type.
//!
//! A [`Value`] holds exactly one [`Kind`] at a time. String, Error, Array and
//! Map own their payload; the remaining kinds are inline scalars. Cloning is
//! always deep, and [`Value::take`] moves a payload out while leaving Null
//! behind, so no payload is ever owned twice.

use std::collections::BTreeMap;
use std::mem;

/// Ordered key/value storage used by [`Value::Map`].
pub type Map = BTreeMap<String, Value>;

/// A dynamically typed value, the statically typed analogue of a script
/// object.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,
    /// Diagnostic message carried as data
    Error(String),
    /// Signed 64-bit integer
    Int(i64),
    /// Unsigned 64-bit integer
    UInt(u64),
    /// Double precision float
    Float(f64),
    /// A single byte
    Char(u8),
    /// Boolean
    Bool(bool),
    /// Owned text
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// String-keyed mapping
    Map(Map),
}

/// The active variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// See [`Value::Null`]
    Null,
    /// See [`Value::Error`]
    Error,
    /// See [`Value::Int`]
    Int,
    /// See [`Value::UInt`]
    UInt,
    /// See [`Value::Float`]
    Float,
    /// See [`Value::Char`]
    Char,
    /// See [`Value::Bool`]
    Bool,
    /// See [`Value::String`]
    String,
    /// See [`Value::Array`]
    Array,
    /// See [`Value::Map`]
    Map,
}

impl Value {
    /// Create a value of the given kind holding that kind's zero value.
    ///
    /// Owned kinds start with an empty payload.
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Null => Value::Null,
            Kind::Error => Value::Error(String::new()),
            Kind::Int => Value::Int(0),
            Kind::UInt => Value::UInt(0),
            Kind::Float => Value::Float(0.0),
            Kind::Char => Value::Char(0),
            Kind::Bool => Value::Bool(false),
            Kind::String => Value::String(String::new()),
            Kind::Array => Value::Array(Vec::new()),
            Kind::Map => Value::Map(Map::new()),
        }
    }

    /// Create a String value, or an Error value when `error` is set.
    pub fn from_text(text: impl Into<String>, error: bool) -> Self {
        if error {
            Value::Error(text.into())
        } else {
            Value::String(text.into())
        }
    }

    /// Create an Error value carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Move the payload out, leaving Null in its place.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// The active kind.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Error(_) => Kind::Error,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Byte width for scalar kinds, element count for String, Array and Map.
    ///
    /// Null and Error report zero.
    pub fn size(&self) -> usize {
        match self {
            Value::Null | Value::Error(_) => 0,
            Value::Int(_) => mem::size_of::<i64>(),
            Value::UInt(_) => mem::size_of::<u64>(),
            Value::Float(_) => mem::size_of::<f64>(),
            Value::Char(_) => mem::size_of::<u8>(),
            Value::Bool(_) => mem::size_of::<bool>(),
            Value::String(s) => s.len(),
            Value::Array(a) => a.len(),
            Value::Map(m) => m.len(),
        }
    }

    /// Returns true if this is an Error value.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for Int, UInt and Float.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }

    /// Returns true if this is a String value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an Array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is a Map value.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// The diagnostic message if this is an Error value.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Value::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Returns a reference to the text if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the entries if this is a Map, None otherwise.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get a member of a Map by key without promoting.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Get an element of an Array by position without promoting.
    ///
    /// Maps are consulted under the decimal form of `index`, matching the
    /// mutable index operator.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            Value::Map(map) => map.get(&index.to_string()),
            _ => None,
        }
    }

    /// Look up a nested value by a `/`-separated path such as `/a/0/b`.
    ///
    /// Array steps must be decimal positions; Map steps are keys. An empty
    /// path addresses `self`.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        path.split('/')
            .filter(|step| !step.is_empty())
            .try_fold(self, |current, step| match current {
                Value::Array(arr) => step.parse::<usize>().ok().and_then(|i| arr.get(i)),
                Value::Map(map) => map.get(step),
                _ => None,
            })
    }

    /// Returns the kind name as a string for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Error(_) => "error",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_initializes_payload() {
        assert_eq!(Value::new(Kind::String), Value::String(String::new()));
        assert_eq!(Value::new(Kind::Array), Value::Array(vec![]));
        assert_eq!(Value::new(Kind::Map), Value::Map(Map::new()));
        assert_eq!(Value::new(Kind::Error), Value::Error(String::new()));
        assert_eq!(Value::new(Kind::Float), Value::Float(0.0));
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_kind_round_trips_through_new() {
        for kind in [
            Kind::Null,
            Kind::Error,
            Kind::Int,
            Kind::UInt,
            Kind::Float,
            Kind::Char,
            Kind::Bool,
            Kind::String,
            Kind::Array,
            Kind::Map,
        ] {
            assert_eq!(Value::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_size() {
        assert_eq!(Value::Int(-1).size(), 8);
        assert_eq!(Value::UInt(1).size(), 8);
        assert_eq!(Value::Float(1.0).size(), 8);
        assert_eq!(Value::Char(b'a').size(), 1);
        assert_eq!(Value::Bool(true).size(), 1);
        assert_eq!(Value::String("abc".into()).size(), 3);
        assert_eq!(Value::Array(vec![Value::Null; 4]).size(), 4);
        assert_eq!(Value::Null.size(), 0);
        assert_eq!(Value::error("boom").size(), 0);
    }

    #[test]
    fn test_take_resets_source() {
        let mut a = Value::Array(vec![Value::UInt(1), Value::UInt(2)]);
        let c = a.take();
        assert!(a.is_null());
        assert_eq!(c.size(), 2);
    }

    #[test]
    fn test_from_text_selects_kind() {
        assert_eq!(Value::from_text("x", false).kind(), Kind::String);
        assert_eq!(Value::from_text("x", true).kind(), Kind::Error);
        assert_eq!(Value::error("bad").error_message(), Some("bad"));
        assert!(Value::error("bad").is_error());
    }

    #[test]
    fn test_get_does_not_promote() {
        let v = Value::Bool(true);
        assert!(v.get("a").is_none());
        assert!(v.get_index(0).is_none());
        assert_eq!(v, Value::Bool(true));
    }

    #[test]
    fn test_pointer() {
        let mut v = Value::Null;
        v["a"][1]["b"] = Value::from(5u8);
        assert_eq!(v.pointer("/a/1/b"), Some(&Value::UInt(5)));
        assert_eq!(v.pointer(""), Some(&v));
        assert!(v.pointer("/a/x").is_none());
        assert!(v.pointer("/a/1/b/c").is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::UInt(0).type_name(), "uint");
        assert_eq!(Value::Map(Map::new()).type_name(), "map");
    }
}
