//! # Preview Results
//!
//! Owned, serializable snapshots returned by the entry points.

use gdl_mesh::{Mesh3D, Shape, Wire};
use glam::DVec2;
use serde::Serialize;

/// A line segment between two plan points.
pub type Segment2D = (DVec2, DVec2);

/// A full circle in plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle2D {
    pub center: DVec2,
    pub radius: f64,
}

/// A circular arc in plan; angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc2D {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Output of a 2D run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preview2DResult {
    pub lines: Vec<Segment2D>,
    /// Closed polygons; the last point connects back to the first.
    pub polygons: Vec<Vec<DVec2>>,
    pub circles: Vec<Circle2D>,
    pub arcs: Vec<Arc2D>,
    pub warnings: Vec<String>,
}

/// Output of a 3D run. One mesh per solid statement, in script order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preview3DResult {
    pub meshes: Vec<Mesh3D>,
    pub wires: Vec<Wire>,
    pub warnings: Vec<String>,
}

impl Preview3DResult {
    /// Appends a built solid and its wireframe.
    pub fn push_shape(&mut self, shape: Shape) {
        self.meshes.push(shape.mesh);
        self.wires.extend(shape.wires);
    }
}

/// Output of a combined run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewResult {
    pub preview_2d: Preview2DResult,
    pub preview_3d: Preview3DResult,
    /// 2D warnings followed by 3D warnings.
    pub warnings: Vec<String>,
}

impl PreviewResult {
    /// Combines two runs, merging their warnings in order.
    pub fn new(preview_2d: Preview2DResult, preview_3d: Preview3DResult) -> Self {
        let warnings = preview_2d
            .warnings
            .iter()
            .chain(&preview_3d.warnings)
            .cloned()
            .collect();
        Self {
            preview_2d,
            preview_3d,
            warnings,
        }
    }
}
