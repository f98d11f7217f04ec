// error.rs - Error type shared by the codec, scanner, classifiers and registries.

use std::fmt;

use crate::codepoint::CodePoint;

/// Error type for every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnicodeError {
    /// A value outside `0..=0x10FFFF` was given where a scalar value is required.
    InvalidCodePoint(CodePoint),
    /// A code-unit index or sub-range lies outside the valid bounds, or an
    /// offset runs past the available scalar values.
    ///
    /// `start..limit` is the range the index was checked against.
    IndexOutOfRange {
        index: usize,
        start: usize,
        limit: usize,
    },
    /// No block or script is registered under this name or alias.
    UnknownName(String),
}

impl fmt::Display for UnicodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnicodeError::InvalidCodePoint(cp) => {
                write!(f, "invalid code point: 0x{:X}", cp)
            }
            UnicodeError::IndexOutOfRange { index, start, limit } => {
                write!(f, "index {} out of range {}..{}", index, start, limit)
            }
            UnicodeError::UnknownName(name) => write!(f, "unknown name: {:?}", name),
        }
    }
}

impl std::error::Error for UnicodeError {}

/// Shorthand for results carrying a [`UnicodeError`].
pub type Result<T> = std::result::Result<T, UnicodeError>;

impl UnicodeError {
    pub(crate) fn out_of_range(index: usize, start: usize, limit: usize) -> Self {
        UnicodeError::IndexOutOfRange { index, start, limit }
    }
}
