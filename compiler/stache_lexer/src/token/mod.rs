//! Tokens produced by the tokenizer.
//!
//! A [`Token`] pairs a [`TokenKind`] payload with its location: the line
//! where it begins, the byte span it covers in the template, and the
//! caller's [`TemplateId`]. Tokens are immutable once built.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use stache_lexer_core::{parse_key_path, Span, IMPLICIT_ITERATOR};

/// Caller-supplied template identifier, used only in diagnostics.
///
/// Cheap to clone: every token of a scan shares the same allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TemplateId(Option<Arc<str>>);

impl TemplateId {
    /// Identify a template by name (a path, a registry key, ...).
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(Some(name.into()))
    }

    /// A template without an identifier, e.g. one built from a string literal.
    pub fn anonymous() -> Self {
        Self(None)
    }

    /// The identifier, if one was supplied.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for TemplateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TemplateId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => f.write_str(name),
            None => f.write_str("<anonymous>"),
        }
    }
}

/// A dotted lookup chain such as `user.name`, `.` or `.items.first`.
///
/// Never empty. A leading `.` component is the explicit current context;
/// every other component is a non-empty run of non-blank, non-dot text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath {
    components: SmallVec<[String; 2]>,
}

impl KeyPath {
    /// Parse the inner text of a variable or section tag.
    ///
    /// Returns `None` when the text is not a valid key path.
    pub fn parse(src: &str) -> Option<Self> {
        let components = parse_key_path(src)?;
        Some(Self {
            components: components.into_iter().map(str::to_owned).collect(),
        })
    }

    /// The path components in lookup order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Returns `true` for the bare current-context path `.`.
    pub fn is_implicit_iterator(&self) -> bool {
        self.components.len() == 1 && self.has_explicit_context()
    }

    /// Returns `true` when the path starts at the current context (`.`, `.a.b`).
    pub fn has_explicit_context(&self) -> bool {
        self.components
            .first()
            .is_some_and(|c| c == IMPLICIT_ITERATOR)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `.` already ends in the separator, so `.a` is written without a second dot.
        let mut needs_separator = false;
        for component in &self.components {
            if needs_separator {
                f.write_str(".")?;
            }
            f.write_str(component)?;
            needs_separator = component != IMPLICIT_ITERATOR;
        }
        Ok(())
    }
}

/// What a token is, with the payload relevant to that kind only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal template text between tags.
    Text(String),
    /// `{{! ... }}`: body after the `!`, verbatim.
    Comment(String),
    /// `{{name}}`
    EscapedVariable(KeyPath),
    /// `{{{name}}}` or `{{&name}}`
    UnescapedVariable(KeyPath),
    /// `{{#name}}`
    SectionOpening(KeyPath),
    /// `{{^name}}`
    InvertedSectionOpening(KeyPath),
    /// `{{/name}}`
    SectionClosing(KeyPath),
    /// `{{> name}}`: the trimmed partial name, unresolved.
    Partial(String),
    /// `{{=<% %>=}}`: the new markers are already in effect.
    SetDelimiter,
}

impl TokenKind {
    /// Short name of the kind, for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Text(_) => "Text",
            TokenKind::Comment(_) => "Comment",
            TokenKind::EscapedVariable(_) => "EscapedVariable",
            TokenKind::UnescapedVariable(_) => "UnescapedVariable",
            TokenKind::SectionOpening(_) => "SectionOpening",
            TokenKind::InvertedSectionOpening(_) => "InvertedSectionOpening",
            TokenKind::SectionClosing(_) => "SectionClosing",
            TokenKind::Partial(_) => "Partial",
            TokenKind::SetDelimiter => "SetDelimiter",
        }
    }

    /// The key path of variable and section tokens.
    pub fn key_path(&self) -> Option<&KeyPath> {
        match self {
            TokenKind::EscapedVariable(path)
            | TokenKind::UnescapedVariable(path)
            | TokenKind::SectionOpening(path)
            | TokenKind::InvertedSectionOpening(path)
            | TokenKind::SectionClosing(path) => Some(path),
            TokenKind::Text(_)
            | TokenKind::Comment(_)
            | TokenKind::Partial(_)
            | TokenKind::SetDelimiter => None,
        }
    }

    /// Returns `true` for literal text.
    pub fn is_text(&self) -> bool {
        matches!(self, TokenKind::Text(_))
    }
}

/// A token with its source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    line: u32,
    span: Span,
    template_id: TemplateId,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, line: u32, span: Span, template_id: TemplateId) -> Self {
        Self {
            kind,
            line,
            span,
            template_id,
        }
    }

    /// The token's kind and payload.
    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consume the token, keeping only its payload.
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// 1-based line where the token begins.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte range covered in the template, markers included for tags.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Identifier of the template the token came from.
    #[inline]
    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    /// The literal template text this token was scanned from.
    ///
    /// `template` must be the string the token was produced from.
    pub fn source<'t>(&self, template: &'t str) -> &'t str {
        self.span.slice(template)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.span, self.kind.name())?;
        match &self.kind {
            TokenKind::Text(text) | TokenKind::Comment(text) => write!(f, " {text:?}"),
            TokenKind::Partial(name) => write!(f, " {name}"),
            TokenKind::EscapedVariable(path)
            | TokenKind::UnescapedVariable(path)
            | TokenKind::SectionOpening(path)
            | TokenKind::InvertedSectionOpening(path)
            | TokenKind::SectionClosing(path) => write!(f, " {path}"),
            TokenKind::SetDelimiter => Ok(()),
        }
    }
}
