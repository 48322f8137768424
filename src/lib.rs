//! Front-end for Lox expressions: source text is scanned into tokens, parsed
//! into an [`ast::Expr`] tree and rendered back as a parenthesized prefix form.
//!
//! ```text
//! "1 + 2 * 3"  →  Scanner  →  Parser  →  printer  →  "(+ 1 (* 2 3))"
//! ```

pub mod ast;
pub mod error;
pub mod scanner;
pub mod token;

use ast::parser::Parser;
use ast::{printer, Expr};
use error::LoxError;
use scanner::Scanner;

/// Scans and parses `source`.
///
/// Lexical errors come first in the returned list, followed by the syntax
/// error if any. A tree is only returned when there were no errors at all.
pub fn parse(source: &str) -> Result<Expr, Vec<LoxError>> {
    let (tokens, scan_errors) = Scanner::new(source.to_string()).scan_tokens();
    #[cfg(feature = "debugPrintTokens")]
    {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let mut errors: Vec<LoxError> = scan_errors.into_iter().map(LoxError::from).collect();
    let mut parser = Parser::new(tokens);
    match parser.parse() {
        Ok(expr) if errors.is_empty() => {
            #[cfg(feature = "debugPrintAst")]
            println!("{:#?}", expr);
            return Ok(expr);
        }
        Ok(_) => {}
        Err(error) => errors.push(error.into()),
    }
    Err(errors)
}

/// source processing pipeline
/// 1. scan
/// 2. parse
/// 3. render the tree
pub fn run(source: &str) -> Result<String, Vec<LoxError>> {
    parse(source).map(|expr| printer::pretty_print(&expr))
}
