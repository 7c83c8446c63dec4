//! # Built-in Functions
//!
//! The fixed allow-list of callable functions. Names are matched
//! case-insensitively; trigonometric functions take degrees.
//!
//! | Name | Arity | Meaning |
//! |------|-------|---------|
//! | `ABS` | 1 | absolute value |
//! | `SQRT` | 1 | square root, negative input is a domain error |
//! | `SIN` `COS` `TAN` | 1 | trigonometry in degrees |
//! | `INT` | 1 | truncate toward zero |
//! | `ROUND` | 1 | round half to even |
//! | `MIN` `MAX` | 1+ | smallest / largest argument |

use crate::error::EvalError;

/// An allow-listed function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `ABS(x)`
    Abs,
    /// `SQRT(x)`
    Sqrt,
    /// `SIN(deg)`
    Sin,
    /// `COS(deg)`
    Cos,
    /// `TAN(deg)`
    Tan,
    /// `INT(x)`
    Int,
    /// `ROUND(x)`
    Round,
    /// `MIN(a, ...)`
    Min,
    /// `MAX(a, ...)`
    Max,
}

const TABLE: &[(&str, Builtin)] = &[
    ("ABS", Builtin::Abs),
    ("SQRT", Builtin::Sqrt),
    ("SIN", Builtin::Sin),
    ("COS", Builtin::Cos),
    ("TAN", Builtin::Tan),
    ("INT", Builtin::Int),
    ("ROUND", Builtin::Round),
    ("MIN", Builtin::Min),
    ("MAX", Builtin::Max),
];

impl Builtin {
    /// Look up a function by name, ignoring case.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use gdl_script::expr::functions::Builtin;
    ///
    /// assert_eq!(Builtin::lookup("sqrt"), Some(Builtin::Sqrt));
    /// assert_eq!(Builtin::lookup("EXEC"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, builtin)| builtin)
    }

    /// Canonical uppercase name.
    pub fn name(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, builtin)| *builtin == self)
            .map_or("?", |&(key, _)| key)
    }

    fn is_variadic(self) -> bool {
        matches!(self, Builtin::Min | Builtin::Max)
    }

    /// Apply the function to evaluated arguments.
    pub fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        self.check_arity(args.len())?;

        let value = match self {
            Builtin::Min => args.iter().copied().fold(f64::INFINITY, f64::min),
            Builtin::Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Builtin::Abs => args[0].abs(),
            Builtin::Sqrt => {
                if args[0] < 0.0 {
                    return Err(EvalError::Domain(self.name().to_string()));
                }
                args[0].sqrt()
            }
            Builtin::Sin => args[0].to_radians().sin(),
            Builtin::Cos => args[0].to_radians().cos(),
            Builtin::Tan => args[0].to_radians().tan(),
            Builtin::Int => args[0].trunc(),
            Builtin::Round => args[0].round_ties_even(),
        };
        Ok(value)
    }

    fn check_arity(self, found: usize) -> Result<(), EvalError> {
        let ok = if self.is_variadic() { found >= 1 } else { found == 1 };
        if ok {
            return Ok(());
        }
        Err(EvalError::ArgumentCount {
            name: self.name().to_string(),
            expected: if self.is_variadic() { "at least 1" } else { "1" },
            found,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
