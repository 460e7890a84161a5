//! Finite-state parser for dotted key paths (`name`, `a.b.c`, `.`, `.a.b`).
//!
//! # States
//!
//! ```text
//!            blank                       other
//! Initial ─────────► Initial   Initial ─────────► Identifier
//!    │ '.'  (push ".")
//!    ▼
//! LeadingDot ──other──► Identifier ──'.'──► WaitingForIdentifier ──other──► Identifier
//!    │ blank               │ blank
//!    ▼                     ▼
//! WhitespaceSuffix ◄───────┘   (blank: stay; anything else: reject)
//! ```
//!
//! `LeadingDot` rejects a second `.`; `WaitingForIdentifier` rejects blanks
//! and dots. At end of input, `Initial` and `WaitingForIdentifier` reject,
//! `Identifier` pushes its pending span, and the other states accept.
//!
//! Components borrow from the input. The explicit-context marker `.` is the
//! leading dot byte itself, so it borrows too.

use crate::is_blank;

/// The component that denotes the current rendering context.
pub const IMPLICIT_ITERATOR: &str = ".";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Initial,
    LeadingDot,
    /// Inside an identifier that started at the given byte offset.
    Identifier(usize),
    WaitingForIdentifier,
    WhitespaceSuffix,
}

/// Parse the inner text of a variable or section tag into path components.
///
/// Returns `None` for syntax errors. A successful parse always yields at
/// least one component.
pub fn parse_key_path(src: &str) -> Option<Vec<&str>> {
    let mut components = Vec::new();
    let mut state = State::Initial;

    for (i, byte) in src.bytes().enumerate() {
        state = match (state, byte) {
            (State::Initial, b) if is_blank(b) => State::Initial,
            (State::Initial, b'.') => {
                components.push(&src[i..=i]);
                State::LeadingDot
            }
            (State::LeadingDot | State::WhitespaceSuffix, b) if is_blank(b) => {
                State::WhitespaceSuffix
            }
            (State::Initial | State::LeadingDot | State::WaitingForIdentifier, b)
                if b != b'.' && !is_blank(b) =>
            {
                State::Identifier(i)
            }
            (State::Identifier(start), b) if is_blank(b) => {
                components.push(&src[start..i]);
                State::WhitespaceSuffix
            }
            (State::Identifier(start), b'.') => {
                components.push(&src[start..i]);
                State::WaitingForIdentifier
            }
            (State::Identifier(start), _) => State::Identifier(start),
            // `..`, `a. b`, `a..b`, `a b`, `a .b`
            (
                State::Initial
                | State::LeadingDot
                | State::WaitingForIdentifier
                | State::WhitespaceSuffix,
                _,
            ) => return None,
        };
    }

    match state {
        State::Initial | State::WaitingForIdentifier => None,
        State::LeadingDot | State::WhitespaceSuffix => Some(components),
        State::Identifier(start) => {
            components.push(&src[start..]);
            Some(components)
        }
    }
}
