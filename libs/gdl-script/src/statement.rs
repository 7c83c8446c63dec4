//! # Statement Classification
//!
//! Recognizes the shape of a logical line without evaluating anything.
//!
//! ## Order
//!
//! 1. Labels (`10:` or `"name":`)
//! 2. Assignments (`NAME = expr`), except `FOR` headers
//! 3. `FOR` headers and `NEXT`
//! 4. Commands (leading identifier plus argument text)
//!
//! ## Example
//!
//! ```rust
//! use gdl_script::statement::{classify, Statement};
//!
//! assert_eq!(
//!     classify("W = A * 2"),
//!     Statement::Assignment { name: "W", expr: "A * 2" }
//! );
//! assert_eq!(
//!     classify("block 1, 2, 3"),
//!     Statement::Command { keyword: "BLOCK".to_string(), args: "1, 2, 3" }
//! );
//! ```

// =============================================================================
// STATEMENT
// =============================================================================

/// Shape of one logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// Numeric or string label, skipped by the engine.
    Label,
    /// `NAME = expr`.
    Assignment {
        /// Variable name as written.
        name: &'a str,
        /// Right-hand side, untrimmed of inner whitespace.
        expr: &'a str,
    },
    /// A line starting with the `FOR` keyword.
    For,
    /// A line starting with the `NEXT` keyword.
    Next,
    /// Any other line starting with an identifier.
    Command {
        /// Uppercase command keyword.
        keyword: String,
        /// Argument text after the keyword, trimmed.
        args: &'a str,
    },
    /// No command token could be extracted.
    Unparsable,
}

/// Classify a logical line.
pub fn classify(text: &str) -> Statement<'_> {
    if is_label(text) {
        return Statement::Label;
    }

    let is_for = starts_with_keyword(text, "FOR");
    if !is_for {
        if let Some((name, expr)) = split_assignment(text) {
            return Statement::Assignment { name, expr };
        }
    }

    if is_for {
        return Statement::For;
    }
    if starts_with_keyword(text, "NEXT") {
        return Statement::Next;
    }

    match leading_identifier(text) {
        Some(word) => Statement::Command {
            keyword: word.to_ascii_uppercase(),
            args: text[word.len()..].trim(),
        },
        None => Statement::Unparsable,
    }
}

// =============================================================================
// FOR HEADER
// =============================================================================

/// Parts of a `FOR v = start TO end [STEP step]` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForHeader<'a> {
    /// Loop variable, uppercase.
    pub variable: String,
    /// Start expression text.
    pub start: &'a str,
    /// End expression text.
    pub end: &'a str,
    /// Step expression text, if given.
    pub step: Option<&'a str>,
}

/// Parse a `FOR` header.
///
/// `TO` and `STEP` are matched case-insensitively as whitespace-delimited
/// words; the first occurrence of each wins.
///
/// ## Example
///
/// ```rust
/// use gdl_script::statement::parse_for_header;
///
/// let header = parse_for_header("FOR i = 1 TO N STEP 2").unwrap();
/// assert_eq!(header.variable, "I");
/// assert_eq!(header.start, "1");
/// assert_eq!(header.end, "N");
/// assert_eq!(header.step, Some("2"));
/// ```
pub fn parse_for_header(text: &str) -> Option<ForHeader<'_>> {
    if !starts_with_keyword(text, "FOR") {
        return None;
    }
    let rest = &text[3..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start();

    let variable = leading_identifier(rest)?;
    let rest = rest[variable.len()..].trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();

    let (start, tail) = split_on_word(rest, "TO")?;
    let (end, step) = match split_on_word(tail, "STEP") {
        Some((end, step)) => (end, Some(step)),
        None => (tail.trim(), None),
    };
    if end.is_empty() {
        return None;
    }

    Some(ForHeader {
        variable: variable.to_ascii_uppercase(),
        start,
        end,
        step,
    })
}

/// Split `text` around the first standalone occurrence of `word`.
///
/// Both sides must be non-empty after trimming.
fn split_on_word<'a>(text: &'a str, word: &str) -> Option<(&'a str, &'a str)> {
    let bytes = text.as_bytes();
    let len = word.len();
    let mut index = 1;
    while index + len < bytes.len() {
        let before = bytes[index - 1];
        let after = bytes[index + len];
        if before.is_ascii_whitespace()
            && after.is_ascii_whitespace()
            && bytes[index..index + len].eq_ignore_ascii_case(word.as_bytes())
        {
            let left = text[..index].trim();
            let right = text[index + len..].trim();
            if !left.is_empty() && !right.is_empty() {
                return Some((left, right));
            }
        }
        index += 1;
    }
    None
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check whether `text` starts with `keyword` as a whole word, ignoring case.
///
/// ## Example
///
/// ```rust
/// use gdl_script::statement::starts_with_keyword;
///
/// assert!(starts_with_keyword("for i = 1 to 3", "FOR"));
/// assert!(!starts_with_keyword("FORMAT = 1", "FOR"));
/// ```
pub fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    let bytes = text.as_bytes();
    let len = keyword.len();
    if bytes.len() < len || !bytes[..len].eq_ignore_ascii_case(keyword.as_bytes()) {
        return false;
    }
    bytes.get(len).map_or(true, |&b| !is_word_byte(b))
}

/// Leading `[A-Za-z_][A-Za-z0-9_]*` identifier of `text`, if any.
pub fn leading_identifier(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return None,
    }
    let end = bytes
        .iter()
        .position(|&b| !is_word_byte(b))
        .unwrap_or(bytes.len());
    Some(&text[..end])
}

/// Labels are `<digits>:` or `"<text>":` at the start of a line.
fn is_label(text: &str) -> bool {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        return text[digits..].trim_start().starts_with(':');
    }
    if let Some(rest) = text.strip_prefix('"') {
        if let Some(close) = rest.find('"') {
            return close > 0 && rest[close + 1..].trim_start().starts_with(':');
        }
    }
    false
}

/// `NAME = expr` with a non-empty right-hand side.
fn split_assignment(text: &str) -> Option<(&str, &str)> {
    let name = leading_identifier(text)?;
    let rest = text[name.len()..].trim_start();
    let expr = rest.strip_prefix('=')?.trim();
    if expr.is_empty() {
        return None;
    }
    Some((name, expr))
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// =============================================================================
// TESTS
// =============================================================================
