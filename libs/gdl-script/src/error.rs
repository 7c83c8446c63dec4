//! # Evaluation Errors
//!
//! Error types for expression parsing and evaluation.

use thiserror::Error;

/// Errors that can occur while parsing or evaluating an expression.
///
/// Every variant names the piece of text that caused it so the caller can
/// cite it in a diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Expression text was blank.
    #[error("empty expression")]
    Empty,

    /// Character outside the arithmetic grammar.
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),

    /// Numeric literal that does not parse.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    /// Token in a position the grammar does not allow.
    #[error("unexpected {found} (expected {expected})")]
    Syntax {
        /// What the parser was looking for.
        expected: &'static str,
        /// The token text found instead.
        found: String,
    },

    /// Variable not present in the environment.
    #[error("undefined variable {0}")]
    UndefinedVariable(String),

    /// Call to a function outside the allow-list.
    #[error("function {0} is not supported")]
    UnknownFunction(String),

    /// Allowed function called with the wrong number of arguments.
    #[error("{name} expects {expected} argument(s), got {found}")]
    ArgumentCount {
        /// Function name, uppercase.
        name: String,
        /// Human-readable arity, e.g. `1` or `at least 1`.
        expected: &'static str,
        /// Number of arguments supplied.
        found: usize,
    },

    /// Division, floor division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Operation without a real result, e.g. `SQRT(-1)`.
    #[error("math domain error in {0}")]
    Domain(String),

    /// Parentheses, signs or operators nested past the parser's limit.
    #[error("expression nested deeper than {limit}")]
    TooDeep {
        /// Maximum accepted depth.
        limit: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
