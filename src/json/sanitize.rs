//! Sanitization pass run before structural parsing.
//!
//! A single left-to-right scan that:
//!
//! - copies string literals, quotes included, through untouched
//! - drops every byte below `!` (0x21) outside string literals
//! - tracks bracket nesting on an explicit, bounded stack so stray or
//!   mismatched `]`/`}` are caught before any value is built
//!
//! Inside a string a backslash always pairs with the byte after it, so an
//! escaped quote never terminates the literal. The structural parser
//! follows the same rule.

use std::str::CharIndices;

use super::limits::Limits;
use crate::error::{Container, ParseError, ParseResult};

/// Strip insignificant whitespace and check bracket balance.
///
/// The output is idempotent: sanitizing it again returns it unchanged.
pub fn sanitize(input: &str, limits: &Limits) -> ParseResult<String> {
    if input.len() as u64 > limits.max_input_size {
        return Err(ParseError::InputTooLarge {
            size: input.len() as u64,
            limit: limits.max_input_size,
        });
    }

    let mut out = String::with_capacity(input.len());
    let mut stack: Vec<Container> = Vec::new();
    let mut chars = input.char_indices();

    while let Some((pos, ch)) = chars.next() {
        if (ch as u32) < 33 {
            continue;
        }
        match ch {
            '"' => {
                copy_string(&mut chars, pos, &mut out)?;
                continue;
            }
            '[' | '{' => {
                let container = if ch == '[' {
                    Container::Array
                } else {
                    Container::Object
                };
                stack.push(container);
                if stack.len() as u64 > limits.max_nesting_depth {
                    return Err(ParseError::NestingTooDeep {
                        depth: stack.len() as u64,
                        limit: limits.max_nesting_depth,
                    });
                }
            }
            ']' | '}' => match stack.last() {
                Some(open) if char::from(open.closer()) == ch => {
                    stack.pop();
                }
                _ => {
                    return Err(ParseError::StrayBracket {
                        found: ch,
                        position: pos,
                    })
                }
            },
            _ => {}
        }
        out.push(ch);
    }

    if out.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if let Some(&container) = stack.last() {
        return Err(ParseError::UnterminatedContainer { container });
    }

    log::trace!("sanitized {} bytes down to {}", input.len(), out.len());
    Ok(out)
}

/// Copy a string literal whose opening quote sits at `start`, through the
/// closing quote.
fn copy_string(chars: &mut CharIndices<'_>, start: usize, out: &mut String) -> ParseResult<()> {
    out.push('"');
    let mut escaped = false;
    for (_, ch) in chars.by_ref() {
        out.push(ch);
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            return Ok(());
        }
    }
    Err(ParseError::UnterminatedString { position: start })
}
