//! Delimiter-aware substring search with newline accounting.
//!
//! [`find_marker`] is the single source of line-number bookkeeping for the
//! tokenizer: every byte the scanner skips over passes through it exactly
//! once, so summing `newlines` across calls yields the current line.
//!
//! The match itself is a plain ordinal comparison (`memmem`), independent of
//! the newline counter. A needle that contains `\n` still matches, and its
//! own newlines are not counted here; the caller accounts for the marker
//! bytes it steps over.

use memchr::{memchr_iter, memmem};

use crate::Span;

/// Result of searching for a marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Byte range of the first occurrence, or `None` if the marker does not
    /// occur at or after the search start.
    pub range: Option<Span>,
    /// Number of `\n` bytes between the search start and the match start
    /// (or the end of the haystack when there is no match).
    pub newlines: u32,
}

/// Find the first occurrence of `needle` in `haystack` at or after `from`.
///
/// # Contract
///
/// `from <= haystack.len()` and `haystack.len() <= u32::MAX`. Both hold for
/// positions produced by [`Cursor`](crate::Cursor).
#[allow(
    clippy::cast_possible_truncation,
    reason = "haystack.len() <= u32::MAX by contract, so every offset and count fits"
)]
pub fn find_marker(needle: &str, haystack: &str, from: u32) -> MarkerMatch {
    let bytes = haystack.as_bytes();
    let from = from as usize;
    debug_assert!(from <= bytes.len(), "search start {from} past end of haystack");
    let window = &bytes[from..];

    match memmem::find(window, needle.as_bytes()) {
        Some(offset) => {
            let start = from + offset;
            MarkerMatch {
                range: Some(Span::new(start as u32, (start + needle.len()) as u32)),
                newlines: count_newlines(&window[..offset]),
            }
        }
        None => MarkerMatch {
            range: None,
            newlines: count_newlines(window),
        },
    }
}

/// Count `\n` bytes using SIMD-accelerated search.
#[allow(
    clippy::cast_possible_truncation,
    reason = "slice length <= u32::MAX by find_marker's contract"
)]
fn count_newlines(bytes: &[u8]) -> u32 {
    memchr_iter(b'\n', bytes).count() as u32
}

/// Byte-at-a-time reference implementation for property testing.
#[cfg(test)]
fn scalar_find_marker(needle: &str, haystack: &str, from: u32) -> MarkerMatch {
    let bytes = haystack.as_bytes();
    let needle = needle.as_bytes();
    let mut newlines = 0;
    let mut pos = from as usize;
    while pos < bytes.len() {
        if bytes[pos..].starts_with(needle) {
            return MarkerMatch {
                range: Some(Span::new(
                    u32::try_from(pos).unwrap_or(u32::MAX),
                    u32::try_from(pos + needle.len()).unwrap_or(u32::MAX),
                )),
                newlines,
            };
        }
        if bytes[pos] == b'\n' {
            newlines += 1;
        }
        pos += 1;
    }
    MarkerMatch {
        range: None,
        newlines,
    }
}
