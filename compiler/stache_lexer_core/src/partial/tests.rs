use super::*;

#[test]
fn trims_surrounding_blanks() {
    assert_eq!(parse_partial_name("  foo  "), Some("foo"));
    assert_eq!(parse_partial_name("\tfoo\r\n"), Some("foo"));
}

#[test]
fn blank_name_is_rejected() {
    assert_eq!(parse_partial_name("   "), None);
    assert_eq!(parse_partial_name(""), None);
    assert_eq!(parse_partial_name("\n\t"), None);
}

#[test]
fn punctuation_and_inner_spaces_are_kept() {
    assert_eq!(
        parse_partial_name(" ../shared/header.mustache "),
        Some("../shared/header.mustache")
    );
    assert_eq!(parse_partial_name(" two words "), Some("two words"));
}

#[test]
fn non_blank_unicode_whitespace_is_kept() {
    // U+00A0 is not a tag blank.
    assert_eq!(parse_partial_name("\u{a0}x "), Some("\u{a0}x"));
}
