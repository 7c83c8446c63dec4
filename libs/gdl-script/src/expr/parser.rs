//! # Expression Parser
//!
//! Precedence climbing over the token stream.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | + - | Left |
//! | 2 | * / // % | Left |
//! | 3 | - + (unary) | Right |
//! | 4 | ** ^ | Right |
//!
//! `**` binds tighter than a sign on its left (`-2**2` is `-4`) while its
//! right operand may carry a sign (`2**-1` is `0.5`).
//!
//! Nesting is capped at `MAX_EXPR_DEPTH`, both for recursive calls
//! (parentheses, stacked signs) and for the height of the resulting tree
//! (long operator chains); deeper input is [`EvalError::TooDeep`].
//!
//! ## Example
//!
//! ```rust
//! use gdl_script::expr::parse;
//! use gdl_script::expr::ast::{BinaryOp, Expr};
//!
//! let expr = parse("1 + 2 * 3").unwrap();
//! assert!(matches!(expr, Expr::Binary { op: BinaryOp::Add, .. }));
//! ```

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::functions::Builtin;
use super::lexer::{Token, TokenKind};
use crate::error::EvalError;
use config::constants::MAX_EXPR_DEPTH;

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Binary operator precedence levels. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    /// Addition/subtraction: `+ -`
    Term = 1,
    /// Multiplication/division: `* / // %`
    Factor = 2,
    /// Past every left-associative level
    Unary = 3,
}

impl Precedence {
    fn of_binary(kind: TokenKind) -> Option<(Self, BinaryOp)> {
        match kind {
            TokenKind::Plus => Some((Self::Term, BinaryOp::Add)),
            TokenKind::Minus => Some((Self::Term, BinaryOp::Sub)),
            TokenKind::Star => Some((Self::Factor, BinaryOp::Mul)),
            TokenKind::Slash => Some((Self::Factor, BinaryOp::Div)),
            TokenKind::SlashSlash => Some((Self::Factor, BinaryOp::FloorDiv)),
            TokenKind::Percent => Some((Self::Factor, BinaryOp::Mod)),
            _ => None,
        }
    }

    /// Next higher precedence level, used for left associativity.
    fn next(self) -> Self {
        match self {
            Self::Term => Self::Factor,
            Self::Factor | Self::Unary => Self::Unary,
        }
    }
}

// =============================================================================
// NODE
// =============================================================================

/// A parsed subtree and the height of its deepest branch.
///
/// Left-associative chains grow the tree without recursing in the parser,
/// so height is tracked separately from the call depth.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    fn branch(expr: Expr, height: usize) -> Result<Self, EvalError> {
        if height > MAX_EXPR_DEPTH {
            return Err(EvalError::TooDeep {
                limit: MAX_EXPR_DEPTH,
            });
        }
        Ok(Self { expr, height })
    }

    fn binary(op: BinaryOp, left: Node, right: Node) -> Result<Self, EvalError> {
        let height = left.height.max(right.height) + 1;
        let expr = Expr::Binary {
            op,
            left: Box::new(left.expr),
            right: Box::new(right.expr),
        };
        Self::branch(expr, height)
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Expression parser over a token vector ending with `Eof`.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    /// Active recursive calls, bounded by `MAX_EXPR_DEPTH`.
    depth: usize,
}

impl Parser {
    /// Create a parser for lexed tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parse a complete expression; trailing tokens are an error.
    pub fn parse(mut self) -> Result<Expr, EvalError> {
        if self.peek_kind() == TokenKind::Eof {
            return Err(EvalError::Empty);
        }
        let node = self.parse_precedence(Precedence::Term)?;
        if self.peek_kind() != TokenKind::Eof {
            return Err(self.unexpected("an operator or end of expression"));
        }
        Ok(node.expr)
    }

    fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Node, EvalError> {
        self.enter()?;
        let mut left = self.parse_unary()?;

        while let Some((prec, op)) = Precedence::of_binary(self.peek_kind()) {
            if prec < min_prec {
                break;
            }
            self.advance();
            let right = self.parse_precedence(prec.next())?;
            left = Node::binary(op, left, right)?;
        }

        self.leave();
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Node, EvalError> {
        let op = match self.peek_kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Minus,
            _ => return self.parse_power(),
        };
        self.advance();
        self.enter()?;
        let operand = self.parse_unary()?;
        self.leave();

        let height = operand.height + 1;
        let expr = Expr::Unary {
            op,
            operand: Box::new(operand.expr),
        };
        Node::branch(expr, height)
    }

    fn parse_power(&mut self) -> Result<Node, EvalError> {
        let base = self.parse_primary()?;
        if self.peek_kind() != TokenKind::StarStar {
            return Ok(base);
        }
        self.advance();
        self.enter()?;
        let exponent = self.parse_unary()?;
        self.leave();
        Node::binary(BinaryOp::Pow, base, exponent)
    }

    fn parse_primary(&mut self) -> Result<Node, EvalError> {
        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                token
                    .text
                    .parse::<f64>()
                    .map(|value| Node::leaf(Expr::Number(value)))
                    .map_err(|_| EvalError::InvalidNumber(token.text))
            }
            TokenKind::Identifier => {
                let name = self.advance().text;
                if self.peek_kind() == TokenKind::LParen {
                    self.parse_call(name)
                } else {
                    Ok(Node::leaf(Expr::Variable(name)))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_precedence(Precedence::Term)?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            _ => Err(self.unexpected("a number, variable or `(`")),
        }
    }

    /// `name ( [expr {, expr}] )`
    fn parse_call(&mut self, name: String) -> Result<Node, EvalError> {
        let function = Builtin::lookup(&name).ok_or(EvalError::UnknownFunction(name))?;
        self.expect(TokenKind::LParen, "`(`")?;

        let mut args = Vec::new();
        let mut height = 0;
        if self.peek_kind() != TokenKind::RParen {
            loop {
                let arg = self.parse_precedence(Precedence::Term)?;
                height = height.max(arg.height);
                args.push(arg.expr);
                if self.peek_kind() != TokenKind::Comma {
                    break;
                }
                self.advance();
            }
        }
        self.expect(TokenKind::RParen, "`,` or `)`")?;

        Node::branch(Expr::Call { function, args }, height + 1)
    }

    // =========================================================================
    // DEPTH
    // =========================================================================

    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_EXPR_DEPTH {
            return Err(EvalError::TooDeep {
                limit: MAX_EXPR_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // TOKEN HELPERS
    // =========================================================================

    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.position.min(last)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, EvalError> {
        if self.peek_kind() == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> EvalError {
        EvalError::Syntax {
            expected,
            found: self.peek().describe(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
