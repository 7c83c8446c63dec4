//! # Line Normalizer
//!
//! Converts raw script text into logical statements.
//!
//! ## Rules
//!
//! - Everything from the first `!` outside a quoted string is a comment
//! - Lines that are blank after stripping are dropped
//! - A line ending in `,` continues onto the next non-blank line
//! - A logical line keeps the number of its *first* physical line
//!
//! ## Example
//!
//! ```rust
//! use gdl_script::lines::normalize;
//!
//! let lines = normalize("BLOCK 1,\n  2, ! depth next\n  3\n");
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].line, 1);
//! assert_eq!(lines[0].text, "BLOCK 1, 2, 3");
//! ```

// =============================================================================
// LOGICAL LINE
// =============================================================================

/// One normalized statement tagged with its originating source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the first physical line of the statement.
    pub line: usize,
    /// Statement text without comments, continuation lines joined by a space.
    pub text: String,
}

impl LogicalLine {
    /// Create a logical line.
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Normalize script text into logical lines.
///
/// ## Parameters
///
/// - `script`: Raw script source
///
/// ## Returns
///
/// Logical lines in source order. A continuation still open at the end of
/// the input is emitted as-is.
///
/// ## Example
///
/// ```rust
/// use gdl_script::lines::normalize;
///
/// let lines = normalize("! header\n\nA = 1\nLINE2 0,0,A,A");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].line, 4);
/// ```
pub fn normalize(script: &str) -> Vec<LogicalLine> {
    let mut out = Vec::new();
    let mut buffer = String::new();
    let mut start_line = 0;

    for (index, raw) in script.lines().enumerate() {
        let code = strip_comment(raw).trim();
        if code.is_empty() {
            continue;
        }

        if buffer.is_empty() {
            start_line = index + 1;
        } else {
            buffer.push(' ');
        }
        buffer.push_str(code);

        if code.ends_with(',') {
            continue;
        }

        out.push(LogicalLine::new(start_line, buffer.trim()));
        buffer.clear();
    }

    if !buffer.is_empty() {
        out.push(LogicalLine::new(start_line, buffer.trim()));
    }

    out
}

/// Cut a physical line at its comment marker.
///
/// `!` inside a single- or double-quoted string does not start a comment.
fn strip_comment(raw: &str) -> &str {
    let mut quote: Option<char> = None;
    for (index, ch) in raw.char_indices() {
        match (quote, ch) {
            (None, '!') => return &raw[..index],
            (None, '"' | '\'') => quote = Some(ch),
            (Some(open), _) if ch == open => quote = None,
            _ => {}
        }
    }
    raw
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Split a command's argument text on top-level commas.
///
/// Commas nested in parentheses stay with their argument. Pieces are
/// trimmed; empty pieces between commas are kept (they fail evaluation
/// later), an empty trailing piece is dropped.
///
/// ## Example
///
/// ```rust
/// use gdl_script::lines::split_args;
///
/// assert_eq!(split_args("1, MAX(2, 3), A*2"), vec!["1", "MAX(2, 3)", "A*2"]);
/// assert_eq!(split_args("1,,2"), vec!["1", "", "2"]);
/// assert!(split_args("").is_empty());
/// ```
pub fn split_args(text: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(text[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        args.push(tail);
    }
    args
}

// =============================================================================
// TESTS
// =============================================================================
