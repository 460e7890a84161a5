use super::*;
use pretty_assertions::assert_eq;

#[test]
fn docs_open_with_their_code() {
    for &code in ErrorCode::ALL {
        let doc = ErrorDocs::get(code);
        assert!(
            doc.starts_with(&format!("# {code}: ")),
            "doc for {code} should open with its heading"
        );
    }
}

#[test]
fn titles_come_from_headings() {
    assert_eq!(ErrorDocs::title(ErrorCode::E0001), "Unclosed Mustache Tag");
    assert_eq!(ErrorDocs::title(ErrorCode::E0002), "Empty Tag");
    assert_eq!(ErrorDocs::title(ErrorCode::E0006), "Template Too Large");
}

#[test]
fn index_lists_every_code_once() {
    let codes: Vec<ErrorCode> = ErrorDocs::index().map(|(code, _)| code).collect();
    assert_eq!(codes, ErrorCode::ALL);
    assert!(ErrorDocs::index().all(|(_, title)| !title.is_empty()));
}
