//! Lexer: splits source text into tokens
//!
//! A single pattern is applied repeatedly from the start of the input. Each
//! match skips leading whitespace and commas, then captures one of:
//!
//! - the splice marker `~@`
//! - a structural character: `[ ] { } ( ) ' ` ~ ^ @`
//! - a double-quoted string (possibly unterminated)
//! - a `;` comment running to the end of the line
//! - a run of anything else (symbols, numbers, keywords)

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\s,]*(~@|[\[\]{}()'`~^@]|"(?:\\.|[^\\"])*"?|;.*|[^\s\[\]{}('"`,;)]*)"#)
        .expect("token pattern is a valid regex")
});

/// One lexical unit: the matched text and where it starts in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: Arc<str>,
    offset: usize,
}

impl Token {
    /// Create a token from its text and byte offset.
    pub fn new(text: impl Into<Arc<str>>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// The matched source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the token in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Tokens are never empty; provided for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the end of the token.
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// Whether this is a `;` line comment.
    pub fn is_comment(&self) -> bool {
        self.text.starts_with(';')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split `source` into tokens, in source order.
///
/// Comments are returned as tokens; the reader skips them. Unterminated
/// strings are returned as-is and rejected later by the reader.
///
/// ```
/// use sprig::lexer::tokenize;
///
/// let tokens: Vec<_> = tokenize("(+ 1 2)").iter().map(|t| t.text().to_string()).collect();
/// assert_eq!(tokens, ["(", "+", "1", "2", ")"]);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for caps in TOKEN_PATTERN.captures_iter(source) {
        let Some(m) = caps.get(1) else { break };
        // Only trailing whitespace leaves the capture empty
        if m.as_str().is_empty() {
            break;
        }
        tokens.push(Token::new(m.as_str(), m.start()));
    }
    tokens
}
