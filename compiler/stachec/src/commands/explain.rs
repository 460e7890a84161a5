//! The `explain` command: display documentation for an error code.

use stache_diagnostic::{ErrorCode, ErrorDocs};

/// A code that `stache explain` does not know.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

/// Look up the documentation for a code such as `E0001` (case-insensitive).
pub fn explanation(code_str: &str) -> Result<&'static str, UnknownErrorCode> {
    code_str
        .trim()
        .parse::<ErrorCode>()
        .map(ErrorDocs::get)
        .map_err(|()| UnknownErrorCode(code_str.to_owned()))
}

/// One `CODE  Title` line per known error code.
pub fn code_index() -> String {
    ErrorDocs::index()
        .map(|(code, title)| format!("  {code}  {title}\n"))
        .collect()
}

/// Print the documentation for `code_str`, or exit with status 1.
pub fn explain_error(code_str: &str) {
    match explanation(code_str) {
        Ok(doc) => println!("{doc}"),
        Err(error) => {
            eprintln!("{error}");
            eprintln!();
            eprintln!("Codes have the format EXXXX where X is a digit. Known codes:");
            eprint!("{}", code_index());
            std::process::exit(1);
        }
    }
}

/// Print every error code with its title.
pub fn list_error_codes() {
    println!("Error codes (run `stache explain <code>` for details):");
    print!("{}", code_index());
}
