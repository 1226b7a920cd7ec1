//! The dynamic value type and its coercions.
//!
//! - [`types`] - [`Value`], [`Kind`] and the predicates/accessors
//! - [`convert`] - construction from native types, total `to_*` coercions
//! - [`index`] - integer and string indexing with in-place promotion
//! - [`display`] - `to_string` rendering
//!
//! # Example
//!
//! ```
//! use dynvar::Value;
//!
//! // A fresh Null is promoted by indexing, no shape declaration needed.
//! let mut v = Value::Null;
//! v["name"] = "ada".into();
//! v["langs"][0] = "rust".into();
//!
//! assert!(v.is_map());
//! assert_eq!(v["langs"].size(), 1);
//! assert_eq!(v["missing"].to_int(), 0);
//! ```

pub mod convert;
pub mod display;
pub mod index;
pub mod types;

pub use types::{Kind, Map, Value};
