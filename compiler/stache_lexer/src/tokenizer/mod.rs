//! The scan loop.
//!
//! One pass over the template, alternating between two searches:
//!
//! 1. find the open marker; everything before it is a `Text` token;
//! 2. find the close marker (`}` + close for triple mustaches); the bytes in
//!    between are the tag body, classified by its first byte.
//!
//! A set-delimiter tag swaps the marker pair for the rest of the scan. Line
//! numbers come from the newline counts of the two searches; marker bytes
//! themselves are never counted.

use stache_lexer_core::{parse_partial_name, Cursor, DelimiterPair, Span};
use tracing::{debug, trace};

use crate::{
    KeyPath, TemplateId, Token, TokenKind, TokenizeError, TokenizeErrorKind, TokenizerConfig,
    TokenizerDelegate,
};

/// How a scan ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The whole template was tokenized.
    Completed,
    /// The delegate returned `false` from `on_token`.
    Stopped,
    /// A syntax error was reported to the delegate.
    Failed,
}

/// Single-use Mustache tokenizer.
///
/// [`scan`](Self::scan) consumes the tokenizer: delimiter changes made by a
/// template are local to its scan and can never leak into another one.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    delimiters: DelimiterPair,
}

impl Tokenizer {
    /// Create a tokenizer from a configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            delimiters: config.delimiters,
        }
    }

    /// Tokenize `template`, feeding tokens and any error to `delegate`.
    pub fn scan<D>(
        mut self,
        template: &str,
        template_id: &TemplateId,
        delegate: &mut D,
    ) -> ScanOutcome
    where
        D: TokenizerDelegate + ?Sized,
    {
        debug!(
            template = %template_id,
            len = template.len(),
            delimiters = %self.delimiters,
            "scanning template"
        );

        let Ok(len) = u32::try_from(template.len()) else {
            return fail(
                delegate,
                TokenizeError::new(
                    TokenizeErrorKind::TemplateTooLarge,
                    1,
                    Span::default(),
                    template_id.clone(),
                ),
            );
        };

        let mut cursor = Cursor::new(template);
        loop {
            let open_search = cursor.find(self.delimiters.open());
            let Some(open) = open_search.range else {
                if !cursor.is_eof() {
                    let text = TokenKind::Text(cursor.rest().to_owned());
                    let span = Span::new(cursor.pos(), len);
                    if !emit(delegate, Token::new(text, cursor.line(), span, template_id.clone())) {
                        return stopped();
                    }
                }
                debug!(template = %template_id, lines = cursor.line(), "scan completed");
                return ScanOutcome::Completed;
            };

            if open.start > cursor.pos() {
                let text = TokenKind::Text(cursor.slice(cursor.pos(), open.start).to_owned());
                let span = Span::new(cursor.pos(), open.start);
                if !emit(delegate, Token::new(text, cursor.line(), span, template_id.clone())) {
                    return stopped();
                }
            }

            cursor.advance_to(open.end, open_search.newlines);
            let line = cursor.line();

            // `{{{name}}}` closes with `}` followed by the close marker.
            let close_search = if cursor.byte_at(open.end) == b'{' {
                cursor.find(&format!("}}{}", self.delimiters.close()))
            } else {
                cursor.find(self.delimiters.close())
            };
            let Some(close) = close_search.range else {
                let span = Span::new(open.start, len);
                return fail(
                    delegate,
                    TokenizeError::new(
                        TokenizeErrorKind::UnmatchedOpeningTag,
                        line,
                        span,
                        template_id.clone(),
                    ),
                );
            };

            let span = Span::new(open.start, close.end);
            let inner = cursor.slice(open.end, close.start);
            let kind = match self.classify(inner) {
                Ok(kind) => kind,
                Err(kind) => {
                    return fail(
                        delegate,
                        TokenizeError::new(kind, line, span, template_id.clone()),
                    );
                }
            };

            if !emit(delegate, Token::new(kind, line, span, template_id.clone())) {
                return stopped();
            }

            cursor.advance_to(close.end, close_search.newlines);
        }
    }

    /// Build the payload for a tag body.
    ///
    /// A set-delimiter body installs the new markers before returning.
    fn classify(&mut self, inner: &str) -> Result<TokenKind, TokenizeErrorKind> {
        let Some(&sigil) = inner.as_bytes().first() else {
            return Err(TokenizeErrorKind::EmptyTag);
        };
        if inner.contains(self.delimiters.open()) {
            return Err(TokenizeErrorKind::UnmatchedOpeningTag);
        }

        // Only the sigil arms read `body`, and every sigil is one ASCII byte.
        // A multi-byte first character leaves no boundary at 1, hence `get`.
        let body = inner.get(1..).unwrap_or_default();
        let kind = match sigil {
            b'!' => TokenKind::Comment(body.to_owned()),
            b'#' => TokenKind::SectionOpening(key_path(body)?),
            b'^' => TokenKind::InvertedSectionOpening(key_path(body)?),
            b'/' => TokenKind::SectionClosing(key_path(body)?),
            b'{' | b'&' => TokenKind::UnescapedVariable(key_path(body)?),
            b'>' => {
                let name =
                    parse_partial_name(body).ok_or(TokenizeErrorKind::InvalidPartialName)?;
                TokenKind::Partial(name.to_owned())
            }
            b'=' => {
                let delimiters = DelimiterPair::from_set_delimiter_tag(inner)
                    .ok_or(TokenizeErrorKind::InvalidSetDelimiterTag)?;
                trace!(from = %self.delimiters, to = %delimiters, "delimiters changed");
                self.delimiters = delimiters;
                TokenKind::SetDelimiter
            }
            _ => TokenKind::EscapedVariable(key_path(inner)?),
        };
        Ok(kind)
    }
}

fn key_path(src: &str) -> Result<KeyPath, TokenizeErrorKind> {
    KeyPath::parse(src).ok_or(TokenizeErrorKind::InvalidIdentifier)
}

fn emit<D: TokenizerDelegate + ?Sized>(delegate: &mut D, token: Token) -> bool {
    trace!(
        line = token.line(),
        start = token.span().start,
        end = token.span().end,
        kind = token.kind().name(),
        "token"
    );
    delegate.on_token(token)
}

fn stopped() -> ScanOutcome {
    debug!("scan stopped by delegate");
    ScanOutcome::Stopped
}

#[cold]
fn fail<D: TokenizerDelegate + ?Sized>(delegate: &mut D, error: TokenizeError) -> ScanOutcome {
    debug!(
        line = error.line,
        code = %error.code(),
        kind = %error.kind,
        "scan failed"
    );
    delegate.on_tokenize_error(error);
    ScanOutcome::Failed
}
