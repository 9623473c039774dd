//! Code points and character classification.
//!
//! The tokenizer works one code point at a time. [`Code`] wraps a source
//! character or the distinguished end-of-stream sentinel, so every state
//! transition sees exactly one value and end-of-input needs no special
//! plumbing.
//!
//! Classification is a set of pure predicates. Punctuation that matters to
//! a single state (quotes, `=`, the reserved bareword set) is matched
//! directly against `Code::Char(..)` at the use site.

/// One input code point, or the end of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// A character from the source.
    Char(char),
    /// End-of-stream sentinel.
    Eof,
}

impl Code {
    /// The underlying character, if any.
    #[inline]
    pub fn char(self) -> Option<char> {
        match self {
            Code::Char(c) => Some(c),
            Code::Eof => None,
        }
    }

    /// UTF-8 length in bytes (0 for `Eof`).
    #[inline]
    pub fn len_utf8(self) -> usize {
        match self {
            Code::Char(c) => c.len_utf8(),
            Code::Eof => 0,
        }
    }
}

/// Horizontal space: space or tab.
#[inline]
pub fn is_space(code: Code) -> bool {
    matches!(code, Code::Char(' ' | '\t'))
}

/// Line ending: LF or CR. A CRLF pair classifies one code point at a time.
#[inline]
pub fn is_line_ending(code: Code) -> bool {
    matches!(code, Code::Char('\n' | '\r'))
}

/// Horizontal space or line ending.
#[inline]
pub fn is_space_or_line_ending(code: Code) -> bool {
    is_space(code) || is_line_ending(code)
}

/// ASCII alphabetic.
#[inline]
pub fn is_ascii_alpha(code: Code) -> bool {
    matches!(code, Code::Char(c) if c.is_ascii_alphabetic())
}

/// ASCII alphanumeric.
#[inline]
pub fn is_ascii_alphanumeric(code: Code) -> bool {
    matches!(code, Code::Char(c) if c.is_ascii_alphanumeric())
}

/// Materialize a delimiter literal into its code-point sequence.
///
/// Done once at configuration time; the tokenizer compares against the
/// precomputed sequence and never performs a reverse lookup per character.
pub fn codes_of(literal: &str) -> Vec<Code> {
    literal.chars().map(Code::Char).collect()
}
