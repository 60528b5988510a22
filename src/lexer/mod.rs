pub mod token;


use lazy_static::lazy_static;
use multipeek::{multipeek, MultiPeek};
use std::collections::HashSet;
use std::str::CharIndices;
use token::{LexErrorKind, LexerError, Span, Token, TokenKind};
use tracing::{trace, warn};

use crate::symbol_table::SymbolTable;

macro_rules! hash_set {
    ( $( $key: expr ),* $(,)? ) => {{
        let mut s = HashSet::new();
        $(
            s.insert($key);
        )*
        s
    }}
}

lazy_static! {
    static ref KEYWORDS: HashSet<&'static str> = hash_set! {
        "auto", "break", "case", "char", "const", "continue", "default", "do",
        "double", "else", "enum", "extern", "float", "for", "goto", "if", "int",
        "long", "register", "return", "short", "signed", "sizeof", "static",
        "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
    };
}

const OPERATORS: [char; 12] = ['+', '-', '*', '/', '%', '<', '>', '=', '!', '&', '|', '^'];

const PUNCTUATION: [char; 9] = [';', ',', '.', '(', ')', '{', '}', '[', ']'];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

// Same set as C's isspace() in the "C" locale.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Pull-based scanner over a source string.
///
/// Every identifier it yields is interned into the borrowed [`SymbolTable`]
/// before the token is returned. Lexical errors come out as
/// [`TokenKind::Error`] tokens and scanning carries on after them.
pub struct Lexer<'a, 's> {
    input_str: &'a str,
    input: MultiPeek<CharIndices<'a>>,
    symbols: &'s mut SymbolTable,
    line: usize,
    start: usize,
    start_line: usize,
    current: usize,
}

impl<'a, 's> Lexer<'a, 's> {
    pub fn new(input_str: &'a str, symbols: &'s mut SymbolTable) -> Self {
        Self {
            input_str,
            input: multipeek(input_str.char_indices()),
            symbols,
            line: 1,
            start: 0,
            start_line: 1,
            current: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.input.peek().map(|&(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (idx, c) = self.input.next()?;
        self.current = idx + c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    fn get_lexeme(&self) -> &'a str {
        &self.input_str[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let token = Token {
            lexeme: self.get_lexeme().to_string(),
            kind,
            span: Span(self.start, self.current),
            line: self.start_line,
        };
        match token.error() {
            Some(e) => warn!(line = token.line, start = token.span.0, "{e}"),
            None => trace!(line = token.line, kind = %token.kind, lexeme = %token.lexeme),
        }
        token
    }

    fn line_comment(&mut self) {
        self.advance_while(|c| c != '\n');
    }

    fn block_comment(&mut self) -> Result<(), LexErrorKind> {
        // The '*' of the opener cannot also close the comment.
        self.advance();
        loop {
            match self.advance() {
                None => return Err(LexErrorKind::UnterminatedBlockComment),
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    fn string(&mut self) -> TokenKind {
        loop {
            match self.advance() {
                None => return TokenKind::Error(LexErrorKind::UnterminatedString),
                Some('"') => return TokenKind::StringConstant,
                Some(_) => {}
            }
        }
    }

    fn integer(&mut self) -> TokenKind {
        self.advance_while(|c| c.is_ascii_digit());
        TokenKind::IntegerConstant
    }

    fn identifier(&mut self) -> TokenKind {
        self.advance_while(|c| c == '_' || c.is_ascii_alphanumeric());
        let lexeme = self.get_lexeme();

        if is_keyword(lexeme) {
            TokenKind::Keyword
        } else {
            self.symbols.intern_default(lexeme);
            TokenKind::Identifier
        }
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            self.start = self.current;
            self.start_line = self.line;
            let c = self.advance()?;

            let kind = match c {
                c if is_whitespace(c) => continue,

                '/' => match self.peek() {
                    Some('/') => {
                        self.line_comment();
                        continue;
                    }
                    Some('*') => match self.block_comment() {
                        Ok(()) => continue,
                        Err(e) => TokenKind::Error(e),
                    },
                    _ => TokenKind::Operator,
                },
                c if OPERATORS.contains(&c) => TokenKind::Operator,
                c if PUNCTUATION.contains(&c) => TokenKind::Punctuation,

                '"' => self.string(),
                c if c.is_ascii_digit() => self.integer(),
                c if c == '_' || c.is_ascii_alphabetic() => self.identifier(),

                ch => TokenKind::Error(LexErrorKind::UnrecognizedCharacter {
                    ch,
                    offset: self.start,
                }),
            };

            return Some(self.make_token(kind));
        }
    }
}

/// Runs a full pass, keeping error tokens inline.
pub fn tokenize(input: &str, symbols: &mut SymbolTable) -> Vec<Token> {
    Lexer::new(input, symbols).collect()
}

/// Runs a pass that stops at the first lexical error.
///
/// Identifiers scanned before the error stay in `symbols`.
pub fn tokenize_strict(input: &str, symbols: &mut SymbolTable) -> Result<Vec<Token>, LexerError> {
    Lexer::new(input, symbols).map(Token::into_result).collect()
}
