//! Source span type.
//!
//! A span is a half-open byte range into the original source buffer.
//! Offsets are `u32` - shortcode input is line-sized, not gigabyte-sized.

use std::ops::Range;

/// Half-open byte range `[start, end)` into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first code point.
    pub start: u32,
    /// Byte offset one past the last code point.
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Check if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `usize` range, for indexing.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Resolve the span to its text in the source it was produced from.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.as_range()]
    }
}
