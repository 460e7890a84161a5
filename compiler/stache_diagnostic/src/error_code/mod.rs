//! Error codes for tokenizer diagnostics.

use std::fmt;

/// Error codes for template syntax errors.
///
/// Format: E#### where the E0xxx range covers tag syntax.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unclosed tag, or a tag body containing another open marker
    E0001,
    /// Empty tag
    E0002,
    /// Invalid identifier in a variable or section tag
    E0003,
    /// Blank partial name
    E0004,
    /// Malformed set-delimiter tag
    E0005,
    /// Template larger than 4 GiB
    E0006,
}

impl ErrorCode {
    /// Every code in numeric order. Parsing and `stache explain` walk this
    /// list; add new variants here as well as to `as_str`.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
    ];

    /// Get the numeric code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0003"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
