//! The open/close marker pair bounding tags.

use std::fmt;

/// Default open marker.
const DEFAULT_OPEN: &str = "{{";
/// Default close marker.
const DEFAULT_CLOSE: &str = "}}";

/// Current tag markers.
///
/// Both markers are non-empty. A set-delimiter tag replaces the whole pair;
/// the replacement stays in effect for the rest of the scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
    open: String,
    close: String,
}

impl DelimiterPair {
    /// Create a pair, rejecting empty markers.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Option<Self> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return None;
        }
        Some(Self { open, close })
    }

    /// Parse the inner text of a set-delimiter tag, `=` markers included.
    ///
    /// `"=<% %>="` yields `<%`/`%>`. The text must start and end with `=`
    /// and hold exactly two whitespace-separated fragments in between.
    /// Fragments are not otherwise validated: `=a= b=` is accepted and the
    /// odd markers surface later as unmatched tags.
    pub fn from_set_delimiter_tag(inner: &str) -> Option<Self> {
        let body = inner.strip_prefix('=')?.strip_suffix('=')?;
        let mut fragments = body.split_whitespace();
        let open = fragments.next()?;
        let close = fragments.next()?;
        if fragments.next().is_some() {
            return None;
        }
        Some(Self {
            open: open.to_owned(),
            close: close.to_owned(),
        })
    }

    /// The open marker.
    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The close marker.
    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_owned(),
            close: DEFAULT_CLOSE.to_owned(),
        }
    }
}

impl fmt::Display for DelimiterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.open, self.close)
    }
}
