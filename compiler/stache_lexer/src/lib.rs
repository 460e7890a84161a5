//! Streaming tokenizer for Mustache templates.
//!
//! Converts template text into [`Token`]s: literal text, variables,
//! section boundaries, comments, partial references and set-delimiter
//! directives. Rendering, context lookup and partial loading belong to the
//! consumer.
//!
//! ```text
//! let tokens = stache_lexer::tokenize("Hello {{name}}!", &TemplateId::anonymous())?;
//! // Text("Hello "), EscapedVariable(name), Text("!")
//! ```
//!
//! For streaming, implement [`TokenizerDelegate`] (or use [`FnDelegate`])
//! and call [`Tokenizer::scan`]; returning `false` from `on_token` stops
//! the scan early.

mod config;
mod delegate;
mod lex_error;
mod token;
mod tokenizer;

pub use config::TokenizerConfig;
pub use delegate::{FnDelegate, NoErrorCallback, NoTokenCallback, TokenCollector, TokenizerDelegate};
pub use lex_error::{TokenizeError, TokenizeErrorKind};
pub use stache_lexer_core::{DelimiterPair, Span};
pub use token::{KeyPath, TemplateId, Token, TokenKind};
pub use tokenizer::{ScanOutcome, Tokenizer};

/// Tokenize a whole template with the default `{{`/`}}` markers.
pub fn tokenize(template: &str, template_id: &TemplateId) -> Result<Vec<Token>, TokenizeError> {
    tokenize_with_config(template, TokenizerConfig::default(), template_id)
}

/// Tokenize a whole template starting from `config`.
pub fn tokenize_with_config(
    template: &str,
    config: TokenizerConfig,
    template_id: &TemplateId,
) -> Result<Vec<Token>, TokenizeError> {
    let mut collector = TokenCollector::new();
    Tokenizer::new(config).scan(template, template_id, &mut collector);
    collector.into_result()
}
