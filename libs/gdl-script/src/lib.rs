//! # GDL Script
//!
//! Source-level building blocks for the GDL preview interpreter.
//!
//! ## Architecture
//!
//! ```text
//! script text → lines (LogicalLine) → statement (Statement) → expr (f64)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gdl_script::{evaluate, lines, statement, Environment};
//!
//! let logical = lines::normalize("H = 2 ! height\nBLOCK 1, 1, H * 2");
//! assert_eq!(logical.len(), 2);
//!
//! let mut env = Environment::new();
//! if let statement::Statement::Assignment { name, expr } = statement::classify(&logical[0].text) {
//!     env.set(name, evaluate(expr, &env).unwrap());
//! }
//! assert_eq!(env.get("h"), Some(2.0));
//! ```

pub mod env;
pub mod error;
pub mod expr;
pub mod lines;
pub mod statement;

// Re-export public API
pub use env::Environment;
pub use error::EvalError;
pub use expr::{evaluate, parse};
pub use lines::{normalize, split_args, LogicalLine};
pub use statement::{classify, parse_for_header, ForHeader, Statement};
