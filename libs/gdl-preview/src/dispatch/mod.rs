//! # Geometry Dispatch
//!
//! Keyword tables mapping drawing and solid commands to handlers.
//!
//! Every handler has the same shape: evaluated argument values plus the
//! placement context in, one [`Outcome`] out. The runtime owns argument
//! evaluation, the minimum-argument check and applying the outcome, so a
//! new command is a new table row.
//!
//! ## Example
//!
//! ```rust
//! use gdl_preview::dispatch::{lookup, Mode};
//!
//! let spec = lookup(Mode::Plan2D, "CIRCLE2").unwrap();
//! assert_eq!(spec.min_args, 3);
//! assert!(lookup(Mode::Model3D, "CIRCLE2").is_none());
//! ```

pub mod points;
pub mod three_d;
pub mod two_d;

use crate::result::{Arc2D, Circle2D, Segment2D};
use config::constants::PreviewConfig;
use gdl_mesh::Shape;
use glam::{DVec2, DVec3};
use std::fmt;

// =============================================================================
// MODE
// =============================================================================

/// Which dispatcher a run uses. Modes are never mixed within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 2D plan script: lines, polygons, circles, arcs.
    Plan2D,
    /// 3D model script: meshed solids.
    Model3D,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Plan2D => f.write_str("2d"),
            Mode::Model3D => f.write_str("3d"),
        }
    }
}

// =============================================================================
// COMMAND TABLE
// =============================================================================

/// Placement state a handler may read.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// Uppercase keyword being executed.
    pub keyword: &'a str,
    /// Current transform stack offset.
    pub offset: DVec3,
    pub config: &'a PreviewConfig,
}

impl CommandContext<'_> {
    /// Plan point moved by the X/Y part of the offset.
    pub fn place_2d(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(x + self.offset.x, y + self.offset.y)
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Line(Segment2D),
    Polygon(Vec<DVec2>),
    Circle(Circle2D),
    Arc(Arc2D),
    Solid(Shape),
    /// Statement skipped or only partially supported.
    Warning(String),
}

/// Handler signature shared by every command.
pub type Handler = fn(&[f64], &CommandContext<'_>) -> Outcome;

/// One row of a dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Uppercase command keyword.
    pub keyword: &'static str,
    /// Fewest evaluated values the handler accepts.
    pub min_args: usize,
    /// Whether the argument text is evaluated at all.
    pub evaluates_args: bool,
    pub handler: Handler,
}

impl CommandSpec {
    pub(crate) const fn new(keyword: &'static str, min_args: usize, handler: Handler) -> Self {
        Self {
            keyword,
            min_args,
            evaluates_args: true,
            handler,
        }
    }

    /// A row whose argument text is ignored.
    pub(crate) const fn unevaluated(keyword: &'static str, handler: Handler) -> Self {
        Self {
            keyword,
            min_args: 0,
            evaluates_args: false,
            handler,
        }
    }
}

/// The table for a mode.
pub fn table(mode: Mode) -> &'static [CommandSpec] {
    match mode {
        Mode::Plan2D => two_d::COMMANDS,
        Mode::Model3D => three_d::COMMANDS,
    }
}

/// Finds the row for an uppercase keyword.
pub fn lookup(mode: Mode, keyword: &str) -> Option<&'static CommandSpec> {
    table(mode).iter().find(|spec| spec.keyword == keyword)
}
