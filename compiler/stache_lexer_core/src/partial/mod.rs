//! Partial tag names.

use crate::is_blank;

/// Trim blanks from a partial tag's inner text.
///
/// Returns `None` when nothing but blanks remains. Any other text is a valid
/// name, punctuation and inner spaces included; resolving it to a template
/// is the renderer's job.
pub fn parse_partial_name(src: &str) -> Option<&str> {
    let name = src.trim_matches(|c: char| u8::try_from(c).is_ok_and(is_blank));
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests;
