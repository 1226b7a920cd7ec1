//! Error handling for the JSON codec.
//!
//! Every parse step returns [`ParseResult`] and forwards failures with `?`,
//! so the first error found is the one reported. At the public boundary
//! [`crate::parse_json`] folds an error into an Error-kind [`crate::Value`].

use thiserror::Error;

/// Container kind named by an unterminated-container error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// `[` ... `]`
    Array,
    /// `{` ... `}`
    Object,
}

impl Container {
    /// The closing byte for this container.
    pub fn closer(self) -> u8 {
        match self {
            Container::Array => b']',
            Container::Object => b'}',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Container::Array => "array",
            Container::Object => "object",
        }
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// All failures the sanitizer and structural parser can report.
///
/// Positions are byte offsets. Sanitizer errors point into the raw input,
/// structural errors point into the sanitized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// Nothing but insignificant whitespace was supplied (code 100)
    #[error("JSON: source string was empty")]
    EmptyInput,

    /// A string literal was opened but never closed (code 101)
    #[error("JSON: unterminated string at position: {position}")]
    UnterminatedString {
        /// Position of the opening quote
        position: usize,
    },

    /// An array or object was still open at end of input (code 102)
    #[error("JSON: unterminated {container} definition")]
    UnterminatedContainer {
        /// The innermost container left open
        container: Container,
    },

    /// A closing bracket without a matching opener (code 103)
    #[error("JSON: stray '{found}' at position: {position}")]
    StrayBracket {
        /// The offending closing bracket
        found: char,
        /// Where it was found
        position: usize,
    },

    /// Brackets nested deeper than the configured limit (code 104)
    #[error("JSON: nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep {
        /// Depth reached
        depth: u64,
        /// Configured limit
        limit: u64,
    },

    /// An object member did not start with a quoted label (code 105)
    #[error("JSON: invalid label given for member at position: {position}")]
    InvalidLabel {
        /// Where the label was expected
        position: usize,
    },

    /// A label was not followed by `:` (code 106)
    #[error("JSON: stray string at position: {position}")]
    MissingColon {
        /// Where the colon was expected
        position: usize,
    },

    /// A byte that cannot continue the current container or document (code 107)
    #[error("JSON: unexpected token '{found}' at position: {position}")]
    TrailingToken {
        /// The offending byte
        found: char,
        /// Where it was found
        position: usize,
    },

    /// A byte that cannot start a value (code 108)
    #[error("JSON: invalid token '{found}' at position: {position}")]
    InvalidToken {
        /// The offending byte
        found: char,
        /// Where it was found
        position: usize,
    },

    /// Input ran out where a value or delimiter was required (code 109)
    #[error("JSON: unexpected end of input at position: {position}")]
    UnexpectedEnd {
        /// End-of-input offset
        position: usize,
    },

    /// `true`, `false` or `null` spelled wrong or cut short (code 110)
    #[error("JSON: unexpected token in '{expected}' literal at position: {position}")]
    InvalidLiteral {
        /// The literal being matched
        expected: &'static str,
        /// Position of the first mismatching byte
        position: usize,
    },

    /// A numeral with a second `.`, no digits, or out of 64-bit range (code 111)
    #[error("JSON: malformed number literal at position: {position}")]
    MalformedNumber {
        /// Position of the offending byte or of the numeral start
        position: usize,
    },

    /// Input larger than the configured limit (code 112)
    #[error("JSON: input of {size} bytes exceeds limit {limit}")]
    InputTooLarge {
        /// Input size in bytes
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// String literal longer than the configured limit (code 113)
    #[error("JSON: string literal at position {position} exceeds {limit} bytes")]
    StringTooLong {
        /// Position of the opening quote
        position: usize,
        /// Configured limit
        limit: u64,
    },

    /// Object label longer than the configured limit (code 114)
    #[error("JSON: member label at position {position} exceeds {limit} bytes")]
    LabelTooLong {
        /// Position of the opening quote
        position: usize,
        /// Configured limit
        limit: u64,
    },

    /// Numeral longer than the configured limit (code 115)
    #[error("JSON: number literal at position {position} exceeds {limit} bytes")]
    NumberTooLong {
        /// Position of the first byte of the numeral
        position: usize,
        /// Configured limit
        limit: u64,
    },
}

impl ParseError {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ParseError::EmptyInput => 100,
            ParseError::UnterminatedString { .. } => 101,
            ParseError::UnterminatedContainer { .. } => 102,
            ParseError::StrayBracket { .. } => 103,
            ParseError::NestingTooDeep { .. } => 104,
            ParseError::InvalidLabel { .. } => 105,
            ParseError::MissingColon { .. } => 106,
            ParseError::TrailingToken { .. } => 107,
            ParseError::InvalidToken { .. } => 108,
            ParseError::UnexpectedEnd { .. } => 109,
            ParseError::InvalidLiteral { .. } => 110,
            ParseError::MalformedNumber { .. } => 111,
            ParseError::InputTooLarge { .. } => 112,
            ParseError::StringTooLong { .. } => 113,
            ParseError::LabelTooLong { .. } => 114,
            ParseError::NumberTooLong { .. } => 115,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "EmptyInput",
            ParseError::UnterminatedString { .. } => "UnterminatedString",
            ParseError::UnterminatedContainer { .. } => "UnterminatedContainer",
            ParseError::StrayBracket { .. } => "StrayBracket",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
            ParseError::InvalidLabel { .. } => "InvalidLabel",
            ParseError::MissingColon { .. } => "MissingColon",
            ParseError::TrailingToken { .. } => "TrailingToken",
            ParseError::InvalidToken { .. } => "InvalidToken",
            ParseError::UnexpectedEnd { .. } => "UnexpectedEnd",
            ParseError::InvalidLiteral { .. } => "InvalidLiteral",
            ParseError::MalformedNumber { .. } => "MalformedNumber",
            ParseError::InputTooLarge { .. } => "InputTooLarge",
            ParseError::StringTooLong { .. } => "StringTooLong",
            ParseError::LabelTooLong { .. } => "LabelTooLong",
            ParseError::NumberTooLong { .. } => "NumberTooLong",
        }
    }
}

/// Result type for codec operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_position() {
        let e = ParseError::StrayBracket {
            found: ']',
            position: 7,
        };
        assert_eq!(e.to_string(), "JSON: stray ']' at position: 7");
        assert_eq!(e.code(), 103);
        assert_eq!(e.name(), "StrayBracket");
    }

    #[test]
    fn test_unterminated_container_message() {
        let e = ParseError::UnterminatedContainer {
            container: Container::Object,
        };
        assert_eq!(e.to_string(), "JSON: unterminated object definition");
        assert_eq!(Container::Array.closer(), b']');
    }

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            ParseError::EmptyInput,
            ParseError::UnterminatedString { position: 0 },
            ParseError::UnterminatedContainer {
                container: Container::Array,
            },
            ParseError::StrayBracket {
                found: '}',
                position: 0,
            },
            ParseError::NestingTooDeep { depth: 0, limit: 0 },
            ParseError::InvalidLabel { position: 0 },
            ParseError::MissingColon { position: 0 },
            ParseError::TrailingToken {
                found: 'x',
                position: 0,
            },
            ParseError::InvalidToken {
                found: 'x',
                position: 0,
            },
            ParseError::UnexpectedEnd { position: 0 },
            ParseError::InvalidLiteral {
                expected: "null",
                position: 0,
            },
            ParseError::MalformedNumber { position: 0 },
            ParseError::InputTooLarge { size: 0, limit: 0 },
            ParseError::StringTooLong {
                position: 0,
                limit: 0,
            },
            ParseError::LabelTooLong {
                position: 0,
                limit: 0,
            },
            ParseError::NumberTooLong {
                position: 0,
                limit: 0,
            },
        ];
        let mut codes: Vec<u32> = all.iter().map(ParseError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
