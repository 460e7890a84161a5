use super::*;
use crate::Span;

// === Basic Navigation ===

#[test]
fn starts_at_line_one() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.line(), 1);
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.source_len(), 0);
    assert_eq!(cursor.rest(), "");
}

#[test]
fn advance_to_moves_and_counts_lines() {
    let mut cursor = Cursor::new("a\nb\nc");
    cursor.advance_to(4, 2);
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.line(), 3);
    assert_eq!(cursor.rest(), "c");
}

#[test]
fn advance_to_end_is_eof() {
    let mut cursor = Cursor::new("hi");
    cursor.advance_to(2, 0);
    assert!(cursor.is_eof());
}

// === Byte Access ===

#[test]
fn byte_at_reads_source() {
    let cursor = Cursor::new("{{{x}}}");
    assert_eq!(cursor.byte_at(2), b'{');
    assert_eq!(cursor.byte_at(3), b'x');
}

#[test]
fn byte_at_past_end_is_zero() {
    let cursor = Cursor::new("{{");
    assert_eq!(cursor.byte_at(2), 0);
    assert_eq!(cursor.byte_at(100), 0);
}

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello {{name}}");
    assert_eq!(cursor.slice(8, 12), "name");
    assert_eq!(cursor.slice(3, 3), "");
}

// === Search ===

#[test]
fn find_searches_from_cursor() {
    let mut cursor = Cursor::new("{{a}}\n{{b}}");
    cursor.advance_to(5, 0);
    let m = cursor.find("{{");
    assert_eq!(m.range, Some(Span::new(6, 8)));
    assert_eq!(m.newlines, 1);
}

#[test]
fn find_does_not_move_cursor() {
    let cursor = Cursor::new("{{a}} {{b}}");
    let m = cursor.find("}}");
    assert_eq!(m.range, Some(Span::new(3, 5)));
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.find("}}"), m);
}

#[test]
fn cursor_is_copy_snapshot() {
    let mut cursor = Cursor::new("ab\ncd");
    let snapshot = cursor;
    cursor.advance_to(3, 1);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(snapshot.line(), 1);
    assert_eq!(cursor.line(), 2);
}
