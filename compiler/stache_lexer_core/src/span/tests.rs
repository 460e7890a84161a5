use super::*;

#[test]
fn emptiness() {
    assert!(!Span::new(10, 20).is_empty());
    assert!(Span::new(7, 7).is_empty());
    assert!(Span::default().is_empty());
}

#[test]
fn slice_returns_covered_text() {
    let template = "Hi {{name}}!";
    assert_eq!(Span::new(3, 11).slice(template), "{{name}}");
    assert_eq!(Span::new(3, 11).to_range(), 3..11);
    assert_eq!(Span::new(12, 12).slice(template), "");
}

#[test]
fn slice_on_multibyte_boundaries() {
    let template = "é{{x}}";
    assert_eq!(Span::new(0, 2).slice(template), "é");
    assert_eq!(Span::new(2, 7).slice(template), "{{x}}");
}

#[test]
fn debug_and_display_match() {
    let span = Span::new(4, 12);
    assert_eq!(format!("{span}"), "4..12");
    assert_eq!(format!("{span:?}"), "4..12");
}
