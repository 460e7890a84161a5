//! The `lex` command: print the token stream of a template.

use std::io::{self, Write};

use stache_lexer::{ScanOutcome, Token, TokenizeError, Tokenizer, TokenizerDelegate};
use tracing::debug;

use super::{fail, read_file, CommandError};
use crate::CliOptions;

/// Writes each token on its own line as it arrives.
struct TokenPrinter<W> {
    out: W,
    count: usize,
    io_error: Option<io::Error>,
    error: Option<TokenizeError>,
}

impl<W: Write> TokenizerDelegate for TokenPrinter<W> {
    fn on_token(&mut self, token: Token) -> bool {
        match writeln!(self.out, "{token}") {
            Ok(()) => {
                self.count += 1;
                true
            }
            Err(e) => {
                // A closed pipe ends the scan; there is nobody left to read.
                self.io_error = Some(e);
                false
            }
        }
    }

    fn on_tokenize_error(&mut self, error: TokenizeError) {
        self.error = Some(error);
    }
}

/// Tokenize `template` and write one `line:start..end Kind payload` line
/// per token to `out`.
///
/// Tokens before a syntax error are written before the error is returned.
/// Returns the number of tokens written.
pub fn write_tokens<W: Write>(
    out: W,
    template: &str,
    options: &CliOptions,
) -> Result<usize, CommandError> {
    let mut printer = TokenPrinter {
        out,
        count: 0,
        io_error: None,
        error: None,
    };
    let outcome = Tokenizer::new(options.config.clone()).scan(
        template,
        &options.template_id(),
        &mut printer,
    );
    debug!(?outcome, tokens = printer.count, "lex finished");

    match outcome {
        ScanOutcome::Completed => {
            printer.out.flush()?;
            Ok(printer.count)
        }
        ScanOutcome::Stopped => Err(printer
            .io_error
            .unwrap_or_else(|| io::ErrorKind::BrokenPipe.into())
            .into()),
        ScanOutcome::Failed => {
            printer.out.flush()?;
            match printer.error {
                Some(error) => Err(error.into()),
                None => Ok(printer.count),
            }
        }
    }
}

/// Lex a file and print its tokens to stdout.
pub fn lex_file(options: &CliOptions) {
    let content = read_file(&options.path);
    let stdout = io::stdout().lock();
    if let Err(error) = write_tokens(stdout, &content, options) {
        fail(&error);
    }
}
