use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    #[error("unrecognized character {ch:?} at byte {offset}")]
    UnrecognizedCharacter { ch: char, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    IntegerConstant,
    StringConstant,
    Operator,
    Punctuation,
    Error(LexErrorKind),
}

impl TokenKind {
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntegerConstant => write!(f, "integer constant"),
            TokenKind::StringConstant => write!(f, "string constant"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Punctuation => write!(f, "special character"),
            TokenKind::Error(e) => write!(f, "error: {e}"),
        }
    }
}

/// Byte range `[start, end)` of a token in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span(pub usize, pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
}

#[derive(Error, Debug)]
#[error("LexerError at line {}: {error}", .token.line)]
pub struct LexerError {
    pub token: Token,
    #[source]
    pub error: LexErrorKind,
}

impl Token {
    pub fn error(&self) -> Option<&LexErrorKind> {
        match &self.kind {
            TokenKind::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Turns an `Error`-kind token into a [`LexerError`], passing every other
    /// token through.
    pub fn into_result(self) -> Result<Token, LexerError> {
        match self.error().cloned() {
            Some(error) => Err(LexerError { token: self, error }),
            None => Ok(self),
        }
    }
}
