//! `FOR`/`NEXT` execution.
//!
//! All loops of a run share one iteration counter; a loop that pushes it
//! past the limit is abandoned and execution continues after its `NEXT`.

use super::Runtime;
use crate::dispatch::Mode;
use config::constants::{LOOP_EPSILON, STEP_EPSILON};
use gdl_script::statement::starts_with_keyword;
use gdl_script::{parse_for_header, LogicalLine};

/// Index of the `NEXT` closing the `FOR` at `for_idx`, counting nested
/// headers up to the end of `lines`.
pub(super) fn find_matching_next(lines: &[LogicalLine], for_idx: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, logical) in lines[for_idx..].iter().enumerate() {
        if starts_with_keyword(&logical.text, "FOR") {
            depth += 1;
        } else if starts_with_keyword(&logical.text, "NEXT") {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(for_idx + offset);
            }
        }
    }
    None
}

impl Runtime {
    /// Runs `body` for every value of the loop described by `header`.
    pub(super) fn execute_for(&mut self, header: &LogicalLine, body: &[LogicalLine], mode: Mode) {
        let line = header.line;

        if self.for_depth >= self.config.max_for_nesting {
            self.diagnostics.warn(
                line,
                format!(
                    "FOR nesting deeper than {}, skipped",
                    self.config.max_for_nesting
                ),
            );
            return;
        }

        let Some(parts) = parse_for_header(&header.text) else {
            self.diagnostics
                .warn(line, "FOR header could not be parsed, skipped");
            return;
        };

        let start = self.eval_expr(parts.start, line);
        let end = self.eval_expr(parts.end, line);
        let step = match parts.step {
            Some(step) => self.eval_expr(step, line),
            None => Some(1.0),
        };
        let (Some(start), Some(end), Some(step)) = (start, end, step) else {
            self.diagnostics
                .warn(line, "FOR bounds could not be evaluated, skipped");
            return;
        };

        if step.abs() < STEP_EPSILON {
            self.diagnostics.warn(line, "FOR STEP=0 is invalid, skipped");
            return;
        }

        let in_range = |value: f64| {
            if step > 0.0 {
                value <= end + LOOP_EPSILON
            } else {
                value >= end - LOOP_EPSILON
            }
        };

        let mut value = start;
        while in_range(value) {
            self.loop_iterations += 1;
            if self.loop_iterations > self.config.for_limit {
                self.diagnostics.warn(
                    line,
                    format!(
                        "FOR iterations exceeded limit {}, stopped early",
                        self.config.for_limit
                    ),
                );
                return;
            }

            self.env.set(&parts.variable, value);
            self.for_depth += 1;
            self.exec_block(body, mode);
            self.for_depth -= 1;
            value += step;
        }
    }
}
