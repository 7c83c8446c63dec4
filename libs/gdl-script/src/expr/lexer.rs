//! # Expression Lexer
//!
//! Tokenizes arithmetic expression text.
//!
//! ## Example
//!
//! ```rust
//! use gdl_script::expr::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("2 ^ A").tokenize().unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::StarStar);
//! ```

use crate::error::EvalError;
use std::iter::Peekable;
use std::str::CharIndices;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text as written.
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Text used when the token shows up in an error message.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of expression".to_string(),
            _ => format!("`{}`", self.text),
        }
    }
}

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal like `10`, `2.5` or `1e-3`
    Number,
    /// Variable or function name
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `//`
    SlashSlash,
    /// `%`
    Percent,
    /// `**` or `^`
    StarStar,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// End of input
    Eof,
}

// =============================================================================
// LEXER
// =============================================================================

/// Expression lexer.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for expression text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire expression.
    ///
    /// ## Returns
    ///
    /// Tokens ending with `Eof`, or the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, EvalError> {
        while let Some(&(start, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
                continue;
            }
            self.scan_token(start, ch)?;
        }
        self.tokens.push(Token::new(TokenKind::Eof, ""));
        Ok(self.tokens)
    }

    fn scan_token(&mut self, start: usize, ch: char) -> Result<(), EvalError> {
        if ch.is_ascii_digit() || ch == '.' {
            return self.scan_number(start);
        }
        if ch.is_ascii_alphabetic() || ch == '_' {
            self.scan_identifier(start);
            return Ok(());
        }

        self.chars.next();
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '%' => TokenKind::Percent,
            '^' => TokenKind::StarStar,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '*' => {
                if self.eat('*') {
                    self.push(TokenKind::StarStar, "**");
                    return Ok(());
                }
                TokenKind::Star
            }
            '/' => {
                if self.eat('/') {
                    self.push(TokenKind::SlashSlash, "//");
                    return Ok(());
                }
                TokenKind::Slash
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        };
        self.push(kind, ch.to_string());
        Ok(())
    }

    /// `digits [. digits] [e [+-] digits]`, at least one mantissa digit.
    fn scan_number(&mut self, start: usize) -> Result<(), EvalError> {
        let mut end = start;
        let mut digits = 0;

        end = self.take_digits(end, &mut digits);
        if self.peek_char() == Some('.') {
            self.chars.next();
            end += 1;
            end = self.take_digits(end, &mut digits);
        }
        if digits == 0 {
            return Err(EvalError::InvalidNumber(self.source[start..end].to_string()));
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            let mut exponent_len = 1;
            if matches!(lookahead.peek(), Some((_, '+' | '-'))) {
                lookahead.next();
                exponent_len += 1;
            }
            if matches!(lookahead.peek(), Some((_, c)) if c.is_ascii_digit()) {
                for _ in 0..exponent_len {
                    self.chars.next();
                }
                end += exponent_len;
                let mut exponent_digits = 0;
                end = self.take_digits(end, &mut exponent_digits);
            }
        }

        let source = self.source;
        self.push(TokenKind::Number, &source[start..end]);
        Ok(())
    }

    fn scan_identifier(&mut self, start: usize) {
        let mut end = start;
        while let Some(&(index, ch)) = self.chars.peek() {
            if !(ch.is_ascii_alphanumeric() || ch == '_') {
                break;
            }
            end = index + ch.len_utf8();
            self.chars.next();
        }
        let source = self.source;
        self.push(TokenKind::Identifier, &source[start..end]);
    }

    fn take_digits(&mut self, mut end: usize, count: &mut usize) -> usize {
        while let Some(&(index, ch)) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            end = index + 1;
            *count += 1;
            self.chars.next();
        }
        end
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.tokens.push(Token::new(kind, text));
    }
}

// =============================================================================
// TESTS
// =============================================================================
