use lexer::token::Token;
use symbol_table::SymbolTable;
use tracing::info;

pub mod lexer;
pub mod report;
pub mod symbol_table;

/// Tokens and symbol table produced by one pass over a source text.
#[derive(Debug)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
}

impl Analysis {
    pub fn errors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

pub fn analyze(input: &str) -> Analysis {
    analyze_with(input, SymbolTable::new())
}

pub fn analyze_with(input: &str, mut symbols: SymbolTable) -> Analysis {
    let tokens = lexer::tokenize(input, &mut symbols);
    let analysis = Analysis { tokens, symbols };
    info!(
        tokens = analysis.tokens.len(),
        symbols = analysis.symbols.len(),
        errors = analysis.errors().count(),
        "lexing pass finished"
    );
    analysis
}

/// Like [`analyze_with`], but fails with the first
/// [`LexerError`](lexer::token::LexerError) instead of keeping error tokens.
pub fn analyze_strict(input: &str, mut symbols: SymbolTable) -> anyhow::Result<Analysis> {
    let tokens = lexer::tokenize_strict(input, &mut symbols)?;
    info!(
        tokens = tokens.len(),
        symbols = symbols.len(),
        "strict lexing pass finished"
    );
    Ok(Analysis { tokens, symbols })
}

#[cfg(test)]
mod test {
    use super::*;
    use lexer::token::{LexErrorKind, TokenKind};
    use symbol_table::DEFAULT_BASE_ADDRESS;

    #[test]
    fn test_analyze_uses_default_table() {
        let analysis = analyze("int a = b;");

        assert_eq!(analysis.tokens.len(), 5);
        assert_eq!(analysis.symbols.base_address(), DEFAULT_BASE_ADDRESS);
        assert_eq!(analysis.symbols.get("b").map(|e| e.address), Some(1004));
        assert!(!analysis.has_errors());
    }

    #[test]
    fn test_analyze_keeps_errors_inline() {
        let analysis = analyze("x @ y \"open");

        let errors = analysis
            .errors()
            .map(|t| t.kind.clone())
            .collect::<Vec<_>>();
        assert_eq!(
            errors,
            vec![
                TokenKind::Error(LexErrorKind::UnrecognizedCharacter { ch: '@', offset: 2 }),
                TokenKind::Error(LexErrorKind::UnterminatedString),
            ]
        );
        assert_eq!(analysis.symbols.len(), 2);
    }

    #[test]
    fn test_analyze_strict_downcasts() {
        let err = analyze_strict("a /* open", SymbolTable::new()).unwrap_err();
        let err = err.downcast::<lexer::token::LexerError>().unwrap();

        assert_eq!(err.error, LexErrorKind::UnterminatedBlockComment);
        assert_eq!(err.token.span.0, 2);
    }
}
