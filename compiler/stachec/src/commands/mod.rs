//! Command handlers for the `stache` CLI.
//!
//! Each submodule implements one command. The `*_file` entry points print
//! and exit like a process would; the functions they wrap take a template
//! string and return a `Result`, so they can be tested in-process.

use std::io;

use stache_lexer::TokenizeError;

mod check;
mod explain;
mod lex;

pub use check::{check_file, count_tokens};
pub use explain::{code_index, explain_error, explanation, list_error_codes, UnknownErrorCode};
pub use lex::{lex_file, write_tokens};

/// Why a command failed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

/// Render a tokenize error the way the CLI prints it.
///
/// Errors without a tag to point at (an empty span) are located by
/// template only.
pub fn format_error(error: &TokenizeError) -> String {
    let code = error.code();
    let location = if error.span.is_empty() {
        error.template_id.to_string()
    } else {
        format!("{}:{} (bytes {})", error.template_id, error.line, error.span)
    };
    format!("error[{code}]: {error}\n  --> {location}\n  = help: run `stache explain {code}` for details")
}

/// Print a command failure to stderr and exit with status 1.
pub(crate) fn fail(error: &CommandError) -> ! {
    match error {
        CommandError::Tokenize(error) => eprintln!("{}", format_error(error)),
        CommandError::Io(_) => eprintln!("error: {error}"),
    }
    std::process::exit(1);
}

/// Read a template, or standard input when `path` is `-`.
///
/// Exits with status 1 and a short message on failure.
pub(crate) fn read_file(path: &str) -> String {
    let result = if path == "-" {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    match result {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
