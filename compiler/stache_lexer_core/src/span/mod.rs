//! Byte ranges into a template.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, end)` in a template.
///
/// Rendered as `start..end` by both `Debug` and `Display`, which is also
/// the form the CLI prints.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The text the span covers.
    ///
    /// `template` must be the string the span was measured in; a span from
    /// another string may panic on a character boundary.
    #[inline]
    pub fn slice<'t>(&self, template: &'t str) -> &'t str {
        &template[self.to_range()]
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);

#[cfg(test)]
mod tests;
