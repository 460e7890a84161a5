//! Tokenizer errors.
//!
//! Every error is fatal to the scan: the tokenizer reports it once and stops,
//! without trying to resynchronize.

use stache_diagnostic::ErrorCode;
use stache_lexer_core::Span;

use crate::TemplateId;

/// What went wrong.
///
/// The `Display` text is the description handed to
/// [`TokenizerDelegate::on_error`](crate::TokenizerDelegate::on_error).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TokenizeErrorKind {
    /// An open marker without a close marker, or a tag body containing
    /// another open marker.
    #[error("Unclosed Mustache tag")]
    UnmatchedOpeningTag,
    /// Nothing between the markers.
    #[error("Empty tag")]
    EmptyTag,
    /// A variable or section tag whose body is not a key path.
    #[error("Invalid identifier")]
    InvalidIdentifier,
    /// A partial tag with a blank name.
    #[error("Invalid partial name")]
    InvalidPartialName,
    /// A set-delimiter tag without its closing `=` or without exactly two markers.
    #[error("Invalid set delimiter tag")]
    InvalidSetDelimiterTag,
    /// Template offsets do not fit in 32 bits.
    #[error("Template too large")]
    TemplateTooLarge,
}

impl TokenizeErrorKind {
    /// The stable diagnostic code for this kind.
    pub fn code(self) -> ErrorCode {
        match self {
            TokenizeErrorKind::UnmatchedOpeningTag => ErrorCode::E0001,
            TokenizeErrorKind::EmptyTag => ErrorCode::E0002,
            TokenizeErrorKind::InvalidIdentifier => ErrorCode::E0003,
            TokenizeErrorKind::InvalidPartialName => ErrorCode::E0004,
            TokenizeErrorKind::InvalidSetDelimiterTag => ErrorCode::E0005,
            TokenizeErrorKind::TemplateTooLarge => ErrorCode::E0006,
        }
    }
}

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Parse error at line {line}{}: {kind}", template_suffix(.template_id))]
pub struct TokenizeError {
    /// What went wrong.
    pub kind: TokenizeErrorKind,
    /// 1-based line of the offending tag.
    pub line: u32,
    /// Byte range of the offending tag. Unclosed tags extend to the end of
    /// the template.
    pub span: Span,
    /// Identifier the caller gave the template.
    pub template_id: TemplateId,
}

impl TokenizeError {
    /// Create an error.
    #[cold]
    pub fn new(kind: TokenizeErrorKind, line: u32, span: Span, template_id: TemplateId) -> Self {
        Self {
            kind,
            line,
            span,
            template_id,
        }
    }

    /// The stable diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

fn template_suffix(template_id: &TemplateId) -> String {
    template_id
        .as_str()
        .map_or_else(String::new, |name| format!(" of template {name}"))
}
