//! The `check` command: validate a template without printing tokens.

use stache_lexer::{Token, TokenizeError, Tokenizer, TokenizerDelegate};

use super::{fail, read_file, CommandError};
use crate::CliOptions;

#[derive(Default)]
struct Counter {
    tokens: usize,
    error: Option<TokenizeError>,
}

impl TokenizerDelegate for Counter {
    fn on_token(&mut self, _token: Token) -> bool {
        self.tokens += 1;
        true
    }

    fn on_tokenize_error(&mut self, error: TokenizeError) {
        self.error = Some(error);
    }
}

/// Tokenize `template` and return how many tokens it holds.
pub fn count_tokens(template: &str, options: &CliOptions) -> Result<usize, TokenizeError> {
    let mut counter = Counter::default();
    Tokenizer::new(options.config.clone()).scan(template, &options.template_id(), &mut counter);
    match counter.error {
        Some(error) => Err(error),
        None => Ok(counter.tokens),
    }
}

/// Check a file and print `ok (N tokens)`, or the error and exit with status 1.
pub fn check_file(options: &CliOptions) {
    let content = read_file(&options.path);
    match count_tokens(&content, options) {
        Ok(count) => println!("ok ({count} tokens)"),
        Err(error) => fail(&CommandError::from(error)),
    }
}
