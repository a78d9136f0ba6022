//! Byte cursor over the source text.
//!
//! All delimiters the reader looks for are ASCII, so every position the
//! cursor stops at lies on a UTF-8 character boundary and slicing the source
//! between two such positions never fails.

use bminus_ir::Span;

/// Returns the earliest (minimum) of two optional positions.
///
/// `memchr3` handles at most three needles; scans for more combine several
/// searches through this.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The byte at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Advance past one byte.
    ///
    /// Only called after `current()` returned an ASCII byte.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or("")
    }

    /// Span from `start` to the current position.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(to_offset(start), to_offset(self.pos))
    }

    /// Zero-width span at the current position.
    pub fn point_span(&self) -> Span {
        Span::point(to_offset(self.pos))
    }

    /// Skip ASCII whitespace.
    pub fn eat_whitespace(&mut self) {
        let bytes = self.source.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Advance to the next occurrence of `byte`.
    ///
    /// Returns `true` with the cursor on the found byte, or `false` with the
    /// cursor at end of input.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        let remaining = &self.source.as_bytes()[self.pos..];
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset;
            true
        } else {
            self.pos = self.source.len();
            false
        }
    }

    /// Advance to the next delimiter (ASCII whitespace, `[` or `]`) or end of
    /// input.
    pub fn eat_until_delimiter(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        // Spaces and brackets are by far the most common terminators.
        let primary = memchr::memchr3(b' ', b'[', b']', remaining);
        let secondary = memchr::memchr3(b'\n', b'\t', b'\r', remaining);
        let form_feed = memchr::memchr(b'\x0c', remaining);

        match earliest_of(earliest_of(primary, secondary), form_feed) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }
}

/// Offsets past `u32::MAX` saturate; such sources only degrade diagnostics.
fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}
