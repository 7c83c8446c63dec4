//! # Diagnostics Collector
//!
//! Accumulates the warnings of one run. Every warning is also emitted as a
//! `tracing` event at `WARN` level.

/// Formats a warning, prefixing the line number when it is known.
///
/// # Examples
/// ```
/// use gdl_preview::diagnostics::format_warning;
/// assert_eq!(format_warning(3, "bad"), "line 3: bad");
/// assert_eq!(format_warning(0, "bad"), "bad");
/// ```
pub fn format_warning(line: usize, message: &str) -> String {
    if line > 0 {
        format!("line {line}: {message}")
    } else {
        message.to_string()
    }
}

/// Ordered warning sink.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning. `line` is 0 for run-level warnings.
    pub fn warn(&mut self, line: usize, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::warn!(line, "{message}");
        self.warnings.push(format_warning(line, message));
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}
