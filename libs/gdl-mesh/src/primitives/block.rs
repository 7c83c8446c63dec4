//! # Block Primitive
//!
//! Axis-aligned boxes spanned from the origin by a size vector.

use crate::mesh::{Mesh3D, Shape};
use glam::DVec3;

/// Box edges as vertex index pairs: bottom loop, top loop, verticals.
#[rustfmt::skip]
const EDGES: [[u32; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// Creates a box with one corner at `origin` and the opposite corner at
/// `origin + size`.
///
/// Negative components extend the box in the negative direction; the
/// winding stays outward either way. A zero component gives a flat box
/// whose opposite faces coincide.
///
/// # Returns
///
/// A shape with 8 vertices, 12 triangles and 12 two-point edge wires.
///
/// # Example
///
/// ```rust
/// use gdl_mesh::primitives::create_block;
/// use glam::DVec3;
///
/// let shape = create_block(DVec3::splat(2.0), DVec3::new(1.0, 0.0, 0.0));
/// let (min, max) = shape.mesh.bounding_box();
/// assert_eq!(min, DVec3::new(1.0, 0.0, 0.0));
/// assert_eq!(max, DVec3::new(3.0, 2.0, 2.0));
/// ```
pub fn create_block(size: DVec3, origin: DVec3) -> Shape {
    let min = size.min(DVec3::ZERO);
    let max = size.max(DVec3::ZERO);

    let mut mesh = Mesh3D::with_capacity("BLOCK", 8, 12);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Counter-clockwise seen from outside
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Shape::from_polylines(mesh, EDGES).placed_at(origin)
}
