//! Options shared by the `lex` and `check` commands.
//!
//! ```text
//! stache lex page.mustache --delimiters=<%,%> --name=page
//! ```

use stache_lexer::{DelimiterPair, TemplateId, TokenizerConfig};

/// Parsed arguments of a tokenizing command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Template file to read.
    pub path: String,
    /// Tokenizer settings, including any `--delimiters` override.
    pub config: TokenizerConfig,
    /// Identifier from `--name`, if given.
    pub name: Option<String>,
}

impl CliOptions {
    /// The identifier reported in diagnostics: `--name`, else the path.
    pub fn template_id(&self) -> TemplateId {
        TemplateId::new(self.name.as_deref().unwrap_or(&self.path))
    }
}

/// A command line that could not be turned into [`CliOptions`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("missing template path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid delimiters '{0}': expected two non-empty markers separated by a comma, e.g. --delimiters=<%,%>")]
    InvalidDelimiters(String),
    #[error("empty template name")]
    EmptyName,
}

/// Parse the arguments that follow the command name.
///
/// Flags may appear before or after the path.
pub fn parse_options(args: &[String]) -> Result<CliOptions, OptionError> {
    let mut path = None;
    let mut config = TokenizerConfig::default();
    let mut name = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--delimiters=") {
            config = config.with_delimiters(parse_delimiters(value)?);
        } else if let Some(value) = arg.strip_prefix("--name=") {
            if value.is_empty() {
                return Err(OptionError::EmptyName);
            }
            name = Some(value.to_owned());
        } else if arg.starts_with('-') && arg != "-" {
            return Err(OptionError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(OptionError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(OptionError::MissingPath)?;
    Ok(CliOptions { path, config, name })
}

fn parse_delimiters(value: &str) -> Result<DelimiterPair, OptionError> {
    let invalid = || OptionError::InvalidDelimiters(value.to_owned());
    let (open, close) = value.split_once(',').ok_or_else(invalid)?;
    if open.contains(char::is_whitespace) || close.contains(char::is_whitespace) {
        return Err(invalid());
    }
    DelimiterPair::new(open, close).ok_or_else(invalid)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
