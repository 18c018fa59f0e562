//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Every scanning rule is built from two primitives:
//! - [`peek(offset)`](Cursor::peek) looks ahead without consuming
//! - [`advance()`](Cursor::advance) consumes exactly one byte and returns it
//!
//! Both report end of input as `None`. There is no sentinel value that could
//! be mistaken for source content or for the empty lexeme of `EOF`.
//!
//! The bulk helpers (`eat_while`, `eat_until`, `eat_until_newline_or_eof`)
//! follow the same convention and never move past the end of the source.

/// Byte cursor over source text.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a scanner can snapshot it for lookahead.
///
/// # Invariant
///
/// `pos <= source_len` at all times. The position only moves forward, which
/// is what guarantees that a scan over a finite buffer terminates.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source text being scanned.
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Length of the source in bytes, saturated at `u32::MAX`.
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            source_len: u32::try_from(src.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns the byte `offset` positions ahead of the cursor.
    ///
    /// `peek(0)` is the byte the cursor is on. Returns `None` at or past the
    /// end of the source.
    #[inline]
    pub fn peek(&self, offset: u32) -> Option<u8> {
        let idx = self.pos.checked_add(offset)?;
        if idx >= self.source_len {
            return None;
        }
        self.src.as_bytes().get(idx as usize).copied()
    }

    /// Consume one byte and return it, or `None` at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek(0)?;
        self.pos += 1;
        Some(b)
    }

    /// Consume one full UTF-8 character and return it.
    ///
    /// Used for bytes no lexical rule matches, so a multi-byte character is
    /// reported and skipped as a single unit.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn advance_char(&mut self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let ch = self.src.get(self.pos as usize..)?.chars().next()?;
        self.pos = self
            .pos
            .saturating_add(ch.len_utf8() as u32)
            .min(self.source_len);
        Some(ch)
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Token boundaries from the raw scanner always do: every multi-byte
    /// character is consumed whole by [`advance_char`](Self::advance_char) or
    /// skipped inside a string/comment body that ends on an ASCII byte.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the next byte.
    ///
    /// Stops at end of input regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Advance until `byte` is found or end of input is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is left ON the found
    /// byte (not past it), or at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos;
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
        self.pos - start
    }

    /// Advance to the next `\n` byte or end of input.
    ///
    /// Used by the comment scanner: the newline itself is left for the next
    /// token so line counting happens in one place.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_until(b'\n');
    }

    /// Unconsumed source bytes.
    fn remaining(&self) -> &'a [u8] {
        self.src
            .as_bytes()
            .get(self.pos as usize..self.source_len as usize)
            .unwrap_or_default()
    }
}
