//! # Prism Primitive
//!
//! Vertical extrusion of a planar polygon.

use crate::error::MeshError;
use crate::mesh::{Mesh3D, Shape};
use glam::{DVec2, DVec3};

/// Creates a prism by extruding `points` from `origin.z` by `height`.
///
/// The polygon may be given in either orientation; the winding is chosen
/// so the faces point away from the solid. A zero height gives a flat
/// prism with coincident caps. Caps are triangle fans, so
/// concave polygons produce overlapping cap triangles.
///
/// # Returns
///
/// `2n` vertices (base ring, then top ring), `2n` side triangles and
/// `n - 2` triangles per cap. Wires are the closed base and top loops plus
/// `n` vertical edges.
///
/// # Example
///
/// ```rust
/// use gdl_mesh::primitives::create_prism;
/// use glam::{DVec2, DVec3};
///
/// let triangle = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)];
/// let shape = create_prism(&triangle, 2.0, DVec3::ZERO).unwrap();
/// assert_eq!(shape.mesh.vertex_count(), 6);
/// assert_eq!(shape.mesh.triangle_count(), 6 + 2);
/// ```
pub fn create_prism(points: &[DVec2], height: f64, origin: DVec3) -> Result<Shape, MeshError> {
    let n = points.len();
    if n < 3 {
        return Err(MeshError::TooFewVertices { min: 3, count: n });
    }

    let mut mesh = Mesh3D::with_capacity("PRISM_", 2 * n, 4 * n - 4);
    for z in [0.0, height] {
        for p in points {
            mesh.add_vertex(p.extend(z));
        }
    }

    let n = n as u32;

    // Side faces
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_triangle(i, j, n + j);
        mesh.add_triangle(i, n + j, n + i);
    }

    // Bottom fan
    for i in 1..n - 1 {
        mesh.add_triangle(0, i + 1, i);
    }

    // Top fan
    for i in 1..n - 1 {
        mesh.add_triangle(n, n + i, n + i + 1);
    }

    if signed_area(points) * height < 0.0 {
        mesh.flip_winding();
    }

    let base_loop: Vec<u32> = (0..n).chain([0]).collect();
    let top_loop: Vec<u32> = (n..2 * n).chain([n]).collect();
    let verticals = (0..n).map(|i| vec![i, n + i]);
    let polylines: Vec<Vec<u32>> = [base_loop, top_loop].into_iter().chain(verticals).collect();

    Ok(Shape::from_polylines(mesh, polylines).placed_at(origin))
}

/// Shoelace area; positive for counter-clockwise polygons.
fn signed_area(points: &[DVec2]) -> f64 {
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    twice / 2.0
}
