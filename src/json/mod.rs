//! JSON parsing and serialization for [`Value`](crate::Value).
//!
//! # Architecture
//!
//! - [`limits`] - Configurable parse bounds
//! - [`sanitize`] - Whitespace stripping and bracket balance pre-pass
//! - [`parser`] - Recursive descent parser over sanitized text
//! - [`writer`] - Pretty and compact serialization
//!
//! # Example
//!
//! ```
//! use dynvar::json::{parse, parse_json, to_json_compact};
//!
//! let value = parse("{ \"b\": [1, 2], \"a\": true }").unwrap();
//! assert_eq!(value["b"][1].to_int(), 2);
//! assert_eq!(to_json_compact(&value), "{\"a\":true,\"b\":[1,2]}");
//!
//! // Failures can also be folded into an Error-kind value.
//! assert!(parse_json("[1,2").is_error());
//! ```

pub mod limits;
pub mod parser;
pub mod sanitize;
pub mod writer;

// Re-export commonly used items
pub use limits::Limits;
pub use parser::{parse, parse_json, parse_with_limits, Parser};
pub use sanitize::sanitize;
pub use writer::{to_json, to_json_compact, to_json_with_style, Style};
