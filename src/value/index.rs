//! Indexing, including in-place kind promotion.
//!
//! The mutable operators double as an implicit builder: indexing a value
//! whose kind does not support that index form replaces the kind first.
//!
//! | current kind | `v[i]` (integer)          | `v["k"]` (string)               |
//! |--------------|---------------------------|---------------------------------|
//! | Array        | grow with Null to fit `i` | re-key elements as `"0".."n"`   |
//! | Map          | member `"i"`              | member `"k"`                    |
//! | other        | becomes empty Array       | becomes empty Map               |
//!
//! The shared operators (`&v[i]`) never promote and yield Null for anything
//! missing.

use std::mem;
use std::ops::{Index, IndexMut};

use super::types::{Map, Value};

static NULL: Value = Value::Null;

impl Value {
    /// Mutable element access by position, promoting to Array when needed.
    ///
    /// An Array grows, filling new slots with Null, until `index` is valid.
    /// A Map is addressed under the decimal text of `index`. Any other kind
    /// discards its payload and becomes an Array.
    pub fn element_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Value::Map(map) => map.entry(index.to_string()).or_default(),
            Value::Array(arr) => {
                if index >= arr.len() {
                    arr.resize(index + 1, Value::Null);
                }
                &mut arr[index]
            }
            _ => {
                *self = Value::Array(Vec::new());
                self.element_mut(index)
            }
        }
    }

    /// Mutable member access by key, promoting to Map when needed.
    ///
    /// An Array is re-keyed so that each element lives under its decimal
    /// position. Any other non-Map kind discards its payload and becomes an
    /// empty Map. Missing keys are inserted as Null.
    pub fn member_mut(&mut self, key: &str) -> &mut Value {
        match self {
            Value::Map(map) => map.entry(key.to_string()).or_default(),
            Value::Array(arr) => {
                let map: Map = mem::take(arr)
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect();
                *self = Value::Map(map);
                self.member_mut(key)
            }
            _ => {
                *self = Value::Map(Map::new());
                self.member_mut(key)
            }
        }
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.element_mut(index)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.member_mut(key)
    }
}
