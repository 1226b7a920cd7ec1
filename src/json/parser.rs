//! Recursive descent parser producing [`Value`] trees.
//!
//! Parsing runs in two phases. [`sanitize`] strips insignificant whitespace
//! and checks bracket balance, then [`Parser`] walks the sanitized text
//! with a single cursor shared by every routine. Each routine returns a
//! [`ParseResult`] and forwards a failed sub-parse with `?` before anything
//! is attached to its parent.
//!
//! Numbers are a `-` or digit followed by digits and at most one `.`. A dot
//! makes a Float, otherwise a leading `-` makes an Int and anything else a
//! UInt. String contents are kept verbatim; escape sequences are not
//! decoded.

use super::limits::Limits;
use super::sanitize::sanitize;
use crate::error::{ParseError, ParseResult};
use crate::value::{Map, Value};

/// Structural parser over sanitized text.
pub struct Parser {
    text: String,
    pos: usize,
    limits: Limits,
}

impl Parser {
    /// Sanitize `input` and create a parser positioned at its start.
    pub fn new(input: &str, limits: Limits) -> ParseResult<Self> {
        let text = sanitize(input, &limits)?;
        Ok(Self {
            text,
            pos: 0,
            limits,
        })
    }

    /// Parse the whole input as one value.
    pub fn parse(&mut self) -> ParseResult<Value> {
        let value = self.parse_value()?;

        // Ensure no trailing content
        if let Some(found) = self.current_char() {
            return Err(ParseError::TrailingToken {
                found,
                position: self.pos,
            });
        }

        Ok(value)
    }

    /// Get the current position in the sanitized text.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// The full character at the cursor, for diagnostics.
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|s| s.chars().next())
    }

    fn unexpected(&self) -> ParseError {
        match self.current_char() {
            Some(found) => ParseError::TrailingToken {
                found,
                position: self.pos,
            },
            None => ParseError::UnexpectedEnd { position: self.pos },
        }
    }

    /// Parse a single value.
    fn parse_value(&mut self) -> ParseResult<Value> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd { position: self.pos }),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'"') => {
                let limit = self.limits.max_string_length;
                let s = self.read_quoted(limit, |position, limit| ParseError::StringTooLong {
                    position,
                    limit,
                })?;
                Ok(Value::String(s))
            }
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(_) => Err(ParseError::InvalidToken {
                found: self.current_char().unwrap_or('\u{fffd}'),
                position: self.pos,
            }),
        }
    }

    /// Parse a numeral starting at the cursor.
    fn parse_number(&mut self) -> ParseResult<Value> {
        let start = self.pos;
        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }

        let mut fractional = false;
        while let Some(b) = self.peek() {
            match b {
                b'.' if fractional => {
                    return Err(ParseError::MalformedNumber { position: self.pos });
                }
                b'.' => fractional = true,
                b'0'..=b'9' => {}
                _ => break,
            }
            self.pos += 1;
            if (self.pos - start) as u64 > self.limits.max_number_length {
                return Err(ParseError::NumberTooLong {
                    position: start,
                    limit: self.limits.max_number_length,
                });
            }
        }

        let literal = &self.text[start..self.pos];
        let malformed = ParseError::MalformedNumber { position: start };
        if fractional {
            literal.parse().map(Value::Float).map_err(|_| malformed)
        } else if negative {
            literal.parse().map(Value::Int).map_err(|_| malformed)
        } else {
            literal.parse().map(Value::UInt).map_err(|_| malformed)
        }
    }

    /// Read a quoted run whose opening quote sits at the cursor and return
    /// the bytes strictly between the quotes.
    fn read_quoted(
        &mut self,
        limit: u64,
        too_long: fn(usize, u64) -> ParseError,
    ) -> ParseResult<String> {
        let start = self.pos;
        self.pos += 1;

        let mut escaped = false;
        while let Some(b) = self.peek() {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                let content = &self.text[start + 1..self.pos];
                if content.len() as u64 > limit {
                    return Err(too_long(start, limit));
                }
                self.pos += 1;
                return Ok(content.to_string());
            }
            self.pos += 1;
        }

        Err(ParseError::UnterminatedString { position: start })
    }

    /// Match `word` byte for byte and yield `value`.
    fn parse_literal(&mut self, word: &'static str, value: Value) -> ParseResult<Value> {
        for &expected in word.as_bytes() {
            if self.peek() != Some(expected) {
                return Err(ParseError::InvalidLiteral {
                    expected: word,
                    position: self.pos,
                });
            }
            self.pos += 1;
        }
        Ok(value)
    }

    /// Parse an object. Later duplicates of a label replace earlier ones.
    fn parse_object(&mut self) -> ParseResult<Value> {
        // Consume opening brace
        self.pos += 1;

        let mut map = Map::new();

        // Empty object
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Map(map));
        }

        loop {
            // Expect quoted label
            if self.peek() != Some(b'"') {
                return Err(ParseError::InvalidLabel { position: self.pos });
            }
            let limit = self.limits.max_label_length;
            let label = self.read_quoted(limit, |position, limit| ParseError::LabelTooLong {
                position,
                limit,
            })?;

            // Expect colon
            if self.peek() != Some(b':') {
                return Err(ParseError::MissingColon { position: self.pos });
            }
            self.pos += 1;

            let value = self.parse_value()?;
            map.insert(label, value);

            // Expect comma or closing brace
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    if self.peek() == Some(b'}') {
                        return Err(self.unexpected());
                    }
                }
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }

        Ok(Value::Map(map))
    }

    /// Parse an array.
    fn parse_array(&mut self) -> ParseResult<Value> {
        // Consume opening bracket
        self.pos += 1;

        let mut arr = Vec::new();

        // Empty array
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(arr));
        }

        loop {
            let value = self.parse_value()?;
            arr.push(value);

            // Expect comma or closing bracket
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    if self.peek() == Some(b']') {
                        return Err(self.unexpected());
                    }
                }
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }

        Ok(Value::Array(arr))
    }
}

/// Parse JSON text into a Value with the default limits.
pub fn parse(input: &str) -> ParseResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parse JSON text into a Value with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> ParseResult<Value> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse().inspect_err(|e| {
        log::debug!("parse failed with {}: {}", e.name(), e);
    })
}

/// Parse JSON text, folding any failure into an Error-kind Value.
pub fn parse_json(input: &str) -> Value {
    match parse(input) {
        Ok(value) => value,
        Err(e) => Value::error(e.to_string()),
    }
}
