//! Low-level scanning primitives for Mustache templates.
//!
//! Everything in this crate is pure and allocation-light. The tokenizer in
//! `stache_lexer` drives these helpers once per tag:
//!
//! ```text
//! Cursor ──find_marker()──► open marker ──find_marker()──► close marker
//!                                 │
//!                                 ▼
//!                 parse_key_path() / parse_partial_name() /
//!                 DelimiterPair::from_set_delimiter_tag()
//! ```
//!
//! Offsets are byte offsets into the template and fit in `u32`; callers are
//! expected to reject larger templates before creating a [`Cursor`].

mod cursor;
mod delimiters;
mod key_path;
mod marker;
mod partial;
mod span;

pub use cursor::Cursor;
pub use delimiters::DelimiterPair;
pub use key_path::{parse_key_path, IMPLICIT_ITERATOR};
pub use marker::{find_marker, MarkerMatch};
pub use partial::parse_partial_name;
pub use span::Span;

/// Returns `true` for the bytes that separate key-path components and pad
/// partial names: space, tab, line feed and carriage return.
#[inline]
pub fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
