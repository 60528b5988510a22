use anyhow::Context;
use clap::Parser;
use clex::lexer::token::LexerError;
use clex::report::Report;
use clex::symbol_table::{SymbolTable, DEFAULT_BASE_ADDRESS};
use clex::{analyze_strict, analyze_with};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(version, about = "Lexical analyzer for C-like source", long_about = None)]
struct Cli {
    /// Path of input source file (reads standard input when omitted)
    file: Option<PathBuf>,

    /// Address assigned to the first symbol
    #[arg(long, default_value_t = DEFAULT_BASE_ADDRESS as u32)]
    base_address: u32,

    /// Only list tokens, skip the symbol table
    #[arg(long)]
    tokens_only: bool,

    /// Stop at the first lexical error
    #[arg(long)]
    strict: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn read_source(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read source file '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read source from standard input")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let text = read_source(cli.file.as_ref())?;
    let report = Report::new(!cli.no_color);
    let symbols = SymbolTable::with_base_address(cli.base_address as usize);

    let analysis = if cli.strict {
        match analyze_strict(&text, symbols) {
            Ok(analysis) => analysis,
            Err(err) => {
                let err = err.downcast::<LexerError>()?;
                if let Some(msg) = report.diagnostic(&err.token) {
                    eprintln!("{msg}");
                }
                std::process::exit(1);
            }
        }
    } else {
        analyze_with(&text, symbols)
    };

    if !analysis.tokens.is_empty() {
        println!("{}", report.tokens(&analysis.tokens));
    }
    if !cli.tokens_only {
        println!("\n{}", report.symbol_table(&analysis.symbols));
    }

    analysis
        .errors()
        .filter_map(|t| report.diagnostic(t))
        .for_each(|msg| eprintln!("{msg}"));

    if analysis.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
