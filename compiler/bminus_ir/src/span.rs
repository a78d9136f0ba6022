//! Source location spans.
//!
//! Every syntax node and every error carries a `Span` so the driver can slice
//! the source text when reporting a problem.

use std::fmt;

/// Half-open byte range `[start, end)` into the source text.
///
/// Invariant: `start <= end`. Spans are never consulted by evaluation logic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder span for nodes built outside the parser.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    ///
    /// Callers pass offsets from a single forward scan, so `start <= end`
    /// holds by construction; this is checked in debug builds.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Convert to a `std::ops::Range` for slicing source text.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Slice `source` by this span, or `None` if the span is out of bounds
    /// or not on character boundaries.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.to_range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}
