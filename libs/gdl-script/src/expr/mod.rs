//! # Expression Evaluator
//!
//! Safe evaluation of the restricted arithmetic grammar used in script
//! arguments and assignments.
//!
//! ## Pipeline
//!
//! ```text
//! text → lexer (tokens) → parser (Expr) → eval (f64)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gdl_script::{evaluate, Environment};
//!
//! let mut env = Environment::new();
//! env.set("W", 2.0);
//! assert_eq!(evaluate("w ^ 3 + MAX(1, 4)", &env).unwrap(), 12.0);
//! assert!(evaluate("UNDEFINED + 1", &env).is_err());
//! ```

pub mod ast;
pub mod eval;
pub mod functions;
pub mod lexer;
pub mod parser;

use crate::env::Environment;
use crate::error::EvalError;
use ast::Expr;
use lexer::Lexer;
use parser::Parser;

/// Parse expression text into a tree.
pub fn parse(text: &str) -> Result<Expr, EvalError> {
    let tokens = Lexer::new(text.trim()).tokenize()?;
    Parser::new(tokens).parse()
}

/// Parse and evaluate expression text against an environment.
///
/// ## Errors
///
/// [`EvalError::Empty`] for blank text, otherwise the first lexical,
/// syntactic or evaluation error.
pub fn evaluate(text: &str, env: &Environment) -> Result<f64, EvalError> {
    let expr = parse(text)?;
    eval::eval(&expr, env)
}
