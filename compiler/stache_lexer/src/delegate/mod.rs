//! Consumer side of a scan.
//!
//! The tokenizer hands every token to a [`TokenizerDelegate`] as soon as it
//! is built and retains nothing. Both callbacks have no-op defaults, so a
//! consumer implements only what it needs.

use crate::{TemplateId, Token, TokenizeError};

/// Receives tokens and the terminal error of a scan.
pub trait TokenizerDelegate {
    /// Called once per token, in template order.
    ///
    /// Return `false` to stop the scan. Stopping is not an error and no
    /// error callback follows.
    fn on_token(&mut self, token: Token) -> bool {
        let _ = token;
        true
    }

    /// Called at most once, right before a failed scan stops.
    fn on_error(&mut self, line: u32, template_id: &TemplateId, description: &str) {
        let _ = (line, template_id, description);
    }

    /// Structured form of [`on_error`](Self::on_error).
    ///
    /// The tokenizer calls this method; the default forwards the line,
    /// template identifier and description to `on_error`. Override it to keep
    /// the error kind and span.
    fn on_tokenize_error(&mut self, error: TokenizeError) {
        self.on_error(error.line, &error.template_id, &error.kind.to_string());
    }
}

/// Token callback type used when a [`FnDelegate`] has no token callback.
pub type NoTokenCallback = fn(Token) -> bool;

/// Error callback type used when a [`FnDelegate`] has no error callback.
pub type NoErrorCallback = fn(u32, &TemplateId, &str);

/// Delegate built from two independently optional closures.
pub struct FnDelegate<T, E> {
    on_token: Option<T>,
    on_error: Option<E>,
}

impl<T, E> FnDelegate<T, E>
where
    T: FnMut(Token) -> bool,
    E: FnMut(u32, &TemplateId, &str),
{
    /// Build a delegate from optional callbacks. A missing token callback
    /// keeps scanning; a missing error callback ignores the error.
    pub fn new(on_token: Option<T>, on_error: Option<E>) -> Self {
        Self { on_token, on_error }
    }
}

impl<T> FnDelegate<T, NoErrorCallback>
where
    T: FnMut(Token) -> bool,
{
    /// Only observe tokens.
    pub fn tokens(on_token: T) -> Self {
        Self {
            on_token: Some(on_token),
            on_error: None,
        }
    }
}

impl<E> FnDelegate<NoTokenCallback, E>
where
    E: FnMut(u32, &TemplateId, &str),
{
    /// Only observe the error, e.g. to validate a template.
    pub fn errors(on_error: E) -> Self {
        Self {
            on_token: None,
            on_error: Some(on_error),
        }
    }
}

impl<T, E> TokenizerDelegate for FnDelegate<T, E>
where
    T: FnMut(Token) -> bool,
    E: FnMut(u32, &TemplateId, &str),
{
    fn on_token(&mut self, token: Token) -> bool {
        self.on_token.as_mut().map_or(true, |f| f(token))
    }

    fn on_error(&mut self, line: u32, template_id: &TemplateId, description: &str) {
        if let Some(f) = self.on_error.as_mut() {
            f(line, template_id, description);
        }
    }
}

/// Delegate that buffers every token and keeps the error.
#[derive(Clone, Debug, Default)]
pub struct TokenCollector {
    tokens: Vec<Token>,
    error: Option<TokenizeError>,
}

impl TokenCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens received so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The error that ended the scan, if any.
    pub fn error(&self) -> Option<&TokenizeError> {
        self.error.as_ref()
    }

    /// All tokens, or the error if the scan failed.
    pub fn into_result(self) -> Result<Vec<Token>, TokenizeError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}

impl TokenizerDelegate for TokenCollector {
    fn on_token(&mut self, token: Token) -> bool {
        self.tokens.push(token);
        true
    }

    fn on_tokenize_error(&mut self, error: TokenizeError) {
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests;
