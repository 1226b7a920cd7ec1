//! Dynvar - a dynamic, tagged-union value type with a small JSON codec.
//!
//! A [`Value`] can hold null, an error message, signed or unsigned 64-bit
//! integers, a double, a byte, a boolean, text, an array or a string-keyed
//! map. It is meant as an untyped container for heterogeneous data.
//!
//! # Architecture
//!
//! - [`value`] - Representation, coercions, promoting index operators
//! - [`json`] - Sanitizing pre-pass, recursive descent parser, serializer
//! - [`error`] - Parse error taxonomy
//!
//! # Errors as values
//!
//! Parsing returns a [`ParseResult`] internally and at the Rust boundary
//! ([`json::parse`]). [`parse_json`] keeps the classic contract instead and
//! folds any failure into an Error-kind [`Value`] whose message names the
//! offending position. The `to_*` coercions never fail.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]
// Unit tests may unwrap; library code may not.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod error;
pub mod json;
pub mod value;

// Re-export commonly used types
pub use error::{ParseError, ParseResult};
pub use json::{parse_json, to_json, Limits};
pub use value::{Kind, Map, Value};
