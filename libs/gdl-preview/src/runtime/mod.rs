//! # Execution Engine
//!
//! Walks the logical lines of one script and drives everything else:
//! assignments, `FOR`/`NEXT`, the transform stack and the geometry tables.
//!
//! ## Statement Order
//!
//! Per logical line, the first match wins:
//!
//! 1. label: skipped
//! 2. assignment (never a `FOR` header)
//! 3. `FOR` header, stray `NEXT`
//! 4. `ADD`, `ADDX`, `ADDY`, `ADDZ`, `DEL`
//! 5. `END`, `RETURN`: no-op
//! 6. command in the active mode's table
//! 7. anything else: warning
//!
//! ## Example
//!
//! ```rust
//! use gdl_preview::{Mode, Parameters, Runtime};
//!
//! let mut runtime = Runtime::new(&Parameters::new(), 100).unwrap();
//! runtime.execute("ADD 1, 0, 0\nBLOCK 1, 1, 1", Mode::Model3D);
//! assert_eq!(runtime.offset().x, 1.0);
//!
//! let result = runtime.into_result_3d();
//! assert_eq!(result.meshes.len(), 1);
//! assert_eq!(result.warnings, ["unbalanced ADD/DEL stack, auto DEL 1"]);
//! ```

mod control_flow;
mod transforms;

use crate::diagnostics::Diagnostics;
use crate::dispatch::{self, CommandContext, CommandSpec, Mode, Outcome};
use crate::error::PreviewError;
use crate::params::{seed_environment, Parameters};
use crate::result::{Preview2DResult, Preview3DResult};
use crate::transform::TransformStack;
use config::constants::PreviewConfig;
use gdl_script::{classify, evaluate, normalize, split_args, Environment, LogicalLine, Statement};
use glam::DVec3;

/// State of one preview run.
///
/// A runtime is used for a single script; create a fresh one per call.
#[derive(Debug)]
pub struct Runtime {
    config: PreviewConfig,
    env: Environment,
    transforms: TransformStack,
    /// Iterations of every `FOR` loop in the run, nested ones included.
    loop_iterations: usize,
    /// Currently active `FOR` loops.
    for_depth: usize,
    diagnostics: Diagnostics,
    result_2d: Preview2DResult,
    result_3d: Preview3DResult,
}

impl Runtime {
    /// Creates a runtime with default tessellation and the given loop
    /// limit, rejecting limits below one.
    pub fn new(parameters: &Parameters, for_limit: i64) -> Result<Self, PreviewError> {
        Ok(Self::build(parameters, PreviewConfig::from_signed(for_limit)?))
    }

    /// Creates a runtime from a full configuration after validating it.
    pub fn with_config(parameters: &Parameters, config: PreviewConfig) -> Result<Self, PreviewError> {
        Ok(Self::build(parameters, config.validated()?))
    }

    /// Creates a runtime, clamping the loop limit to at least one.
    pub(crate) fn clamped(parameters: &Parameters, for_limit: i64) -> Self {
        Self::build(parameters, PreviewConfig::clamped(for_limit))
    }

    fn build(parameters: &Parameters, config: PreviewConfig) -> Self {
        Self {
            config,
            env: seed_environment(parameters),
            transforms: TransformStack::new(),
            loop_iterations: 0,
            for_depth: 0,
            diagnostics: Diagnostics::new(),
            result_2d: Preview2DResult::default(),
            result_3d: Preview3DResult::default(),
        }
    }

    /// Executes a script in the given mode. Never fails; problems become
    /// warnings.
    pub fn execute(&mut self, script: &str, mode: Mode) {
        let lines = normalize(script);
        tracing::debug!(%mode, lines = lines.len(), "preview run started");
        self.exec_block(&lines, mode);
    }

    /// Balances the transform stack and moves all warnings into both
    /// results. Calling it again only adds warnings recorded since.
    pub fn finish(&mut self) {
        if !self.transforms.is_empty() {
            let depth = self.transforms.clear();
            self.diagnostics
                .warn(0, format!("unbalanced ADD/DEL stack, auto DEL {depth}"));
        }

        let warnings = self.diagnostics.take();
        tracing::debug!(
            iterations = self.loop_iterations,
            warnings = warnings.len(),
            "preview run finished"
        );
        self.result_2d.warnings.extend(warnings.iter().cloned());
        self.result_3d.warnings.extend(warnings);
    }

    /// Current placement offset.
    pub fn offset(&self) -> DVec3 {
        self.transforms.offset()
    }

    /// Total `FOR` iterations so far, counting the one that hit the limit.
    pub fn loop_iterations(&self) -> usize {
        self.loop_iterations
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Warnings recorded and not yet moved into the results by `finish`.
    pub fn warnings(&self) -> &[String] {
        self.diagnostics.warnings()
    }

    /// Finishes the run and returns the 2D result.
    pub fn into_result_2d(mut self) -> Preview2DResult {
        self.finish();
        self.result_2d
    }

    /// Finishes the run and returns the 3D result.
    pub fn into_result_3d(mut self) -> Preview3DResult {
        self.finish();
        self.result_3d
    }

    // =========================================================================
    // BLOCK EXECUTION
    // =========================================================================

    fn exec_block(&mut self, lines: &[LogicalLine], mode: Mode) {
        let mut idx = 0;
        while idx < lines.len() {
            let LogicalLine { line, text } = &lines[idx];
            let line = *line;

            match classify(text) {
                Statement::Label => {}
                Statement::Assignment { name, expr } => {
                    if let Some(value) = self.eval_expr(expr, line) {
                        self.env.set(name, value);
                    }
                }
                Statement::For => match control_flow::find_matching_next(lines, idx) {
                    Some(next) => {
                        self.execute_for(&lines[idx], &lines[idx + 1..next], mode);
                        idx = next;
                    }
                    None => self
                        .diagnostics
                        .warn(line, "FOR without matching NEXT, skipped"),
                },
                Statement::Next => self.diagnostics.warn(line, "stray NEXT, ignored"),
                Statement::Command { keyword, args } => {
                    self.execute_command(&keyword, args, line, mode)
                }
                Statement::Unparsable => self.diagnostics.warn(line, "unparsable statement, skipped"),
            }
            idx += 1;
        }
    }

    fn execute_command(&mut self, keyword: &str, args: &str, line: usize, mode: Mode) {
        tracing::trace!(line, keyword, "command");

        if self.execute_transform(keyword, args, line) {
            return;
        }
        if matches!(keyword, "END" | "RETURN") {
            return;
        }
        match dispatch::lookup(mode, keyword) {
            Some(spec) => self.dispatch(spec, args, line),
            None => self
                .diagnostics
                .warn(line, format!("unsupported command {keyword}, skipped")),
        }
    }

    fn dispatch(&mut self, spec: &CommandSpec, args: &str, line: usize) {
        let values = if spec.evaluates_args {
            self.eval_args(args, line)
        } else {
            Some(Vec::new())
        };
        let values = match values {
            Some(values) if values.len() >= spec.min_args => values,
            _ => {
                self.diagnostics.warn(
                    line,
                    format!("{} arguments missing or invalid, skipped", spec.keyword),
                );
                return;
            }
        };

        let ctx = CommandContext {
            keyword: spec.keyword,
            offset: self.transforms.offset(),
            config: &self.config,
        };
        match (spec.handler)(&values, &ctx) {
            Outcome::Line(segment) => self.result_2d.lines.push(segment),
            Outcome::Polygon(points) => self.result_2d.polygons.push(points),
            Outcome::Circle(circle) => self.result_2d.circles.push(circle),
            Outcome::Arc(arc) => self.result_2d.arcs.push(arc),
            Outcome::Solid(shape) => self.result_3d.push_shape(shape),
            Outcome::Warning(message) => self.diagnostics.warn(line, message),
        }
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    /// Evaluates non-empty arguments, stopping at the first failure.
    fn eval_args(&mut self, args: &str, line: usize) -> Option<Vec<f64>> {
        split_args(args)
            .into_iter()
            .filter(|arg| !arg.is_empty())
            .map(|arg| self.eval_expr(arg, line))
            .collect()
    }

    /// Evaluates one expression, recording a warning on failure.
    fn eval_expr(&mut self, expr: &str, line: usize) -> Option<f64> {
        let text = expr.trim();
        if text.is_empty() {
            self.diagnostics.warn(line, "empty expression");
            return None;
        }
        match evaluate(text, &self.env) {
            Ok(value) => Some(value),
            Err(err) => {
                self.diagnostics
                    .warn(line, format!("expression failed `{text}`: {err}"));
                None
            }
        }
    }
}
