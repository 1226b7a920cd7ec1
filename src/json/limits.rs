//! Bounds applied while parsing.
//!
//! Every bound is checked and reported as an error rather than assumed.
//! [`Limits::compact`] keeps the classic small scratch sizes (128-byte
//! numerals and labels, 256-byte strings, 128 levels of nesting, one byte
//! of each buffer reserved for a terminator). [`Limits::relaxed`] is meant
//! for larger documents.

/// Bounds applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: u64,
    /// Maximum bracket nesting depth
    pub max_nesting_depth: u64,
    /// Maximum numeral length in bytes, sign included
    pub max_number_length: u64,
    /// Maximum object label length in bytes, quotes excluded
    pub max_label_length: u64,
    /// Maximum string value length in bytes, quotes excluded
    pub max_string_length: u64,
}

impl Limits {
    /// Small fixed bounds matching the classic scratch buffer sizes.
    pub const fn compact() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 128,
            max_number_length: 127,
            max_label_length: 127,
            max_string_length: 255,
        }
    }

    /// Generous bounds for large documents.
    pub const fn relaxed() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64 MiB
            max_nesting_depth: 1024,
            max_number_length: 1024,
            max_label_length: 64 * 1024,        // 64 KiB
            max_string_length: 16 * 1024 * 1024, // 16 MiB
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::compact()
    }
}
