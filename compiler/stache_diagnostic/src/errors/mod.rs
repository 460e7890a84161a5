//! Embedded documentation for `stache explain`.
//!
//! One markdown page per code, compiled into the binary. Each page opens
//! with a `# EXXXX: Title` heading. [`ErrorDocs::get`] matches
//! exhaustively, so a new code does not build until its page exists.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// The markdown page for `code`.
    pub fn get(code: ErrorCode) -> &'static str {
        match code {
            ErrorCode::E0001 => include_str!("E0001.md"),
            ErrorCode::E0002 => include_str!("E0002.md"),
            ErrorCode::E0003 => include_str!("E0003.md"),
            ErrorCode::E0004 => include_str!("E0004.md"),
            ErrorCode::E0005 => include_str!("E0005.md"),
            ErrorCode::E0006 => include_str!("E0006.md"),
        }
    }

    /// The page heading without its code, e.g. `Unclosed Mustache Tag`.
    pub fn title(code: ErrorCode) -> &'static str {
        let heading = Self::get(code).lines().next().unwrap_or_default();
        heading
            .split_once(": ")
            .map_or(heading, |(_, title)| title)
            .trim()
    }

    /// Every code paired with its title, in code order.
    pub fn index() -> impl Iterator<Item = (ErrorCode, &'static str)> {
        ErrorCode::ALL.iter().map(|&code| (code, Self::title(code)))
    }
}

#[cfg(test)]
mod tests;
