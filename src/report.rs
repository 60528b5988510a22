//! Text rendering of a lexing pass: the token listing and the symbol table dump.

use colored::{Color, Colorize};

use crate::lexer::token::{Token, TokenKind};
use crate::symbol_table::SymbolTable;

pub struct Report {
    colored: bool,
}

impl Report {
    const TABLE_TITLE: &'static str = "Content of Symbol Table";
    const TABLE_HEADER: [&'static str; 5] = ["Name", "Type", "No of bytes", "Address", "Value"];

    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn kind_color(kind: &TokenKind) -> Color {
        match kind {
            TokenKind::Keyword => Color::Magenta,
            TokenKind::Identifier => Color::Blue,
            TokenKind::IntegerConstant | TokenKind::StringConstant => Color::Green,
            TokenKind::Operator | TokenKind::Punctuation => Color::White,
            TokenKind::Error(_) => Color::Red,
        }
    }

    /// One `<lexeme> - <kind>` line per token.
    pub fn token(&self, token: &Token) -> String {
        let kind = self.paint(&token.kind.to_string(), Self::kind_color(&token.kind));
        format!("{} - {}", token.lexeme, kind)
    }

    pub fn tokens(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|t| self.token(t))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn symbol_table(&self, table: &SymbolTable) -> String {
        let mut lines = vec![
            self.paint(Self::TABLE_TITLE, Color::Yellow),
            Self::TABLE_HEADER.join("\t"),
        ];
        lines.extend(table.entries().map(|entry| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                self.paint(&entry.name, Color::Blue),
                entry.declared_type,
                entry.size_bytes,
                entry.address,
                entry.value
            )
        }));
        lines.join("\n")
    }

    /// A one-line positioned message for an `Error`-kind token.
    pub fn diagnostic(&self, token: &Token) -> Option<String> {
        let error = token.error()?;
        let message = format!(
            "Error {}:{} (at {:?}):: {}",
            token.line, token.span.0, token.lexeme, error
        );
        Some(self.paint(&message, Color::Red))
    }
}
