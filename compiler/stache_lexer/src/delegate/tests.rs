use super::*;
use crate::{TokenKind, TokenizeErrorKind};
use pretty_assertions::assert_eq;
use stache_lexer_core::Span;

fn text_token(text: &str) -> Token {
    Token::new(
        TokenKind::Text(text.to_owned()),
        1,
        Span::new(0, 1),
        TemplateId::anonymous(),
    )
}

fn sample_error() -> TokenizeError {
    TokenizeError::new(
        TokenizeErrorKind::EmptyTag,
        4,
        Span::new(8, 12),
        TemplateId::new("t"),
    )
}

// === Default Methods ===

struct Silent;

impl TokenizerDelegate for Silent {}

#[test]
fn default_delegate_keeps_scanning() {
    let mut delegate = Silent;
    assert!(delegate.on_token(text_token("x")));
    delegate.on_tokenize_error(sample_error());
}

#[derive(Default)]
struct ErrorRecorder {
    calls: Vec<(u32, String, String)>,
}

impl TokenizerDelegate for ErrorRecorder {
    fn on_error(&mut self, line: u32, template_id: &TemplateId, description: &str) {
        self.calls
            .push((line, template_id.to_string(), description.to_owned()));
    }
}

#[test]
fn structured_error_forwards_to_on_error() {
    let mut delegate = ErrorRecorder::default();
    delegate.on_tokenize_error(sample_error());
    assert_eq!(
        delegate.calls,
        vec![(4, "t".to_owned(), "Empty tag".to_owned())]
    );
}

// === FnDelegate ===

#[test]
fn fn_delegate_forwards_both_callbacks() {
    let mut seen = Vec::new();
    let mut errors = Vec::new();
    {
        let mut delegate = FnDelegate::new(
            Some(|token: Token| {
                seen.push(token);
                false
            }),
            Some(|line: u32, _: &TemplateId, description: &str| {
                errors.push((line, description.to_owned()));
            }),
        );
        assert!(!delegate.on_token(text_token("a")));
        delegate.on_tokenize_error(sample_error());
    }
    assert_eq!(seen.len(), 1);
    assert_eq!(errors, vec![(4, "Empty tag".to_owned())]);
}

#[test]
fn fn_delegate_without_token_callback_continues() {
    let mut errors = 0;
    let mut delegate = FnDelegate::errors(|_: u32, _: &TemplateId, _: &str| errors += 1);
    assert!(delegate.on_token(text_token("a")));
    delegate.on_tokenize_error(sample_error());
    drop(delegate);
    assert_eq!(errors, 1);
}

#[test]
fn fn_delegate_without_error_callback_ignores_errors() {
    let mut count = 0;
    let mut delegate = FnDelegate::tokens(|_: Token| {
        count += 1;
        true
    });
    assert!(delegate.on_token(text_token("a")));
    delegate.on_tokenize_error(sample_error());
    drop(delegate);
    assert_eq!(count, 1);
}

// === TokenCollector ===

#[test]
fn collector_buffers_tokens() {
    let mut collector = TokenCollector::new();
    assert!(collector.on_token(text_token("a")));
    assert!(collector.on_token(text_token("b")));
    assert_eq!(collector.tokens().len(), 2);
    assert!(collector.error().is_none());
    assert_eq!(collector.into_result().map(|t| t.len()), Ok(2));
}

#[test]
fn collector_keeps_error() {
    let mut collector = TokenCollector::new();
    collector.on_token(text_token("a"));
    collector.on_tokenize_error(sample_error());
    assert_eq!(collector.error().map(|e| e.kind), Some(TokenizeErrorKind::EmptyTag));
    assert_eq!(collector.into_result(), Err(sample_error()));
}
