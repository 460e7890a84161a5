//! Forward-only scan cursor over a template.
//!
//! The cursor pairs a byte offset with a 1-based line number. It never
//! rewinds: every move goes through [`Cursor::advance_to`], which takes the
//! newline count reported by [`find_marker`](crate::find_marker) for the
//! bytes being skipped.

use crate::marker::{find_marker, MarkerMatch};

/// Forward-only cursor over a template string.
///
/// Searches never move the cursor; the tokenizer looks ahead for a marker
/// and then commits with [`advance_to`](Self::advance_to).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current byte offset.
    pos: u32,
    /// Line number at `pos` (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at byte 0, line 1.
    ///
    /// # Contract
    ///
    /// `src.len() <= u32::MAX`. The tokenizer rejects larger templates before
    /// creating a cursor.
    pub fn new(src: &'a str) -> Self {
        debug_assert!(
            u32::try_from(src.len()).is_ok(),
            "template length {} exceeds u32::MAX",
            src.len()
        );
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    /// Current byte offset in the template.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Line number at the current offset (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Length of the template in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length checked against u32::MAX in Cursor::new"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.src.len() as u32
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// Returns the byte at `pos`, or `0` past the end of the template.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> u8 {
        self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Extract a template substring.
    ///
    /// # Contract
    ///
    /// `start..end` lies within the template and on character boundaries.
    /// Offsets returned by [`find`](Self::find) always satisfy this, because
    /// UTF-8 needles can only match at character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start as usize..end as usize]
    }

    /// Extract the template from the current offset to the end.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos as usize..]
    }

    /// Search for `needle` from the current offset without moving.
    pub fn find(&self, needle: &str) -> MarkerMatch {
        find_marker(needle, self.src, self.pos)
    }

    /// Move forward to `pos`, crediting `newlines` crossed on the way.
    #[inline]
    pub fn advance_to(&mut self, pos: u32, newlines: u32) {
        debug_assert!(pos >= self.pos, "cursor moved backwards: {} -> {pos}", self.pos);
        debug_assert!(pos <= self.source_len(), "cursor moved past end of template");
        self.pos = pos;
        self.line += newlines;
    }
}

#[cfg(test)]
mod tests;
