//! # Frustum Primitive
//!
//! Generates the truncated cone shared by cylinders and cones.

use super::ring_point;
use crate::error::MeshError;
use crate::mesh::{Mesh3D, Shape};
use config::constants::{DEGENERATE_EPSILON, FRUSTUM_STRUTS};
use glam::DVec3;

/// Creates a frustum standing on `origin` along the Z axis.
///
/// # Arguments
///
/// * `height` - Extent along Z; negative heights extend downwards
/// * `radius_bottom` - Radius of the ring at `origin.z`
/// * `radius_top` - Radius of the ring at `origin.z + height`
/// * `segments` - Ring resolution
/// * `origin` - Center of the bottom ring
///
/// # Returns
///
/// `2 * segments + 2` vertices (two rings, then the bottom and top
/// centers). Sides are two triangles per segment; a cap fan is only added
/// when its radius is non-zero. Wires are both closed ring loops plus
/// evenly spaced vertical struts.
///
/// # Example
///
/// ```rust
/// use gdl_mesh::primitives::create_frustum;
/// use glam::DVec3;
///
/// // Cylinder
/// let shape = create_frustum(2.0, 0.5, 0.5, 24, DVec3::ZERO).unwrap();
/// assert_eq!(shape.mesh.vertex_count(), 50);
/// assert_eq!(shape.mesh.triangle_count(), 96);
///
/// // Cone with a pointed top has no top cap
/// let cone = create_frustum(2.0, 0.5, 0.0, 24, DVec3::ZERO).unwrap();
/// assert_eq!(cone.mesh.triangle_count(), 72);
/// ```
pub fn create_frustum(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    segments: u32,
    origin: DVec3,
) -> Result<Shape, MeshError> {
    MeshError::check_resolution("segments", segments, 3)?;

    if height.abs() <= DEGENERATE_EPSILON {
        return Err(MeshError::degenerate(format!(
            "frustum height must be non-zero: {height}"
        )));
    }
    if radius_bottom < 0.0 || radius_top < 0.0 {
        return Err(MeshError::degenerate(format!(
            "frustum radii must be non-negative: r1={radius_bottom}, r2={radius_top}"
        )));
    }
    if radius_bottom <= DEGENERATE_EPSILON && radius_top <= DEGENERATE_EPSILON {
        return Err(MeshError::degenerate(
            "frustum must have at least one non-zero radius",
        ));
    }

    let seg = segments;
    let mut mesh = Mesh3D::with_capacity("FRUSTUM", 2 * seg as usize + 2, 4 * seg as usize);

    for (radius, z) in [(radius_bottom, 0.0), (radius_top, height)] {
        for t in 0..seg {
            let (cos, sin) = ring_point(t, seg);
            mesh.add_vertex(DVec3::new(radius * cos, radius * sin, z));
        }
    }
    let bottom_center = mesh.add_vertex(DVec3::ZERO);
    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, height));

    // Side faces
    for t in 0..seg {
        let n = (t + 1) % seg;
        mesh.add_triangle(t, n, seg + n);
        mesh.add_triangle(t, seg + n, seg + t);
    }

    // Caps
    if radius_bottom > DEGENERATE_EPSILON {
        for t in 0..seg {
            mesh.add_triangle(bottom_center, (t + 1) % seg, t);
        }
    }
    if radius_top > DEGENERATE_EPSILON {
        for t in 0..seg {
            mesh.add_triangle(top_center, seg + t, seg + (t + 1) % seg);
        }
    }

    if height < 0.0 {
        mesh.flip_winding();
    }

    let bottom_loop = (0..seg).chain([0]);
    let top_loop = (seg..2 * seg).chain([seg]);
    let stride = (seg / FRUSTUM_STRUTS).max(1) as usize;
    let struts = (0..seg).step_by(stride).map(|t| vec![t, seg + t]);

    let polylines: Vec<Vec<u32>> = [bottom_loop.collect(), top_loop.collect()]
        .into_iter()
        .chain(struts)
        .collect();

    Ok(Shape::from_polylines(mesh, polylines).placed_at(origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_counts() {
        let shape = create_frustum(3.0, 1.0, 1.0, 24, DVec3::ZERO).unwrap();
        assert_eq!(shape.mesh.vertex_count(), 50);
        assert_eq!(shape.mesh.triangle_count(), 48 + 24 + 24);
        assert!(shape.mesh.validate().is_ok());
    }

    #[test]
    fn test_wires() {
        let shape = create_frustum(3.0, 1.0, 1.0, 24, DVec3::ZERO).unwrap();
        // two loops + struts at 0, 3, 6, ..., 21
        assert_eq!(shape.wires.len(), 2 + 8);
        assert_eq!(shape.wires[0].len(), 25);
        assert_eq!(shape.wires[0][0], shape.wires[0][24]);
        assert_eq!(shape.wires[2].len(), 2);
    }

    #[test]
    fn test_coarse_ring_strut_every_vertex() {
        let shape = create_frustum(1.0, 1.0, 1.0, 5, DVec3::ZERO).unwrap();
        assert_eq!(shape.wires.len(), 2 + 5);
    }

    #[test]
    fn test_origin_and_height() {
        let shape = create_frustum(2.0, 1.0, 0.5, 24, DVec3::new(1.0, 1.0, 1.0)).unwrap();
        let (min, max) = shape.mesh.bounding_box();
        assert_relative_eq!(min.z, 1.0);
        assert_relative_eq!(max.z, 3.0);
        assert_relative_eq!(max.x, 2.0);
        assert_relative_eq!(min.x, 0.0);
    }

    #[test]
    fn test_side_normal_points_outward() {
        let shape = create_frustum(1.0, 1.0, 1.0, 24, DVec3::ZERO).unwrap();
        let v = shape.mesh.vertices();
        let [a, b, c] = shape.mesh.triangles()[0];
        let (a, b, c) = (v[a as usize], v[b as usize], v[c as usize]);
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.x * centroid.x + normal.y * centroid.y > 0.0);
    }

    #[test]
    fn test_negative_height_flips_winding() {
        let up = create_frustum(1.0, 1.0, 1.0, 8, DVec3::ZERO).unwrap();
        let down = create_frustum(-1.0, 1.0, 1.0, 8, DVec3::ZERO).unwrap();
        let [a, b, c] = up.mesh.triangles()[0];
        assert_eq!(down.mesh.triangles()[0], [a, c, b]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(create_frustum(0.0, 1.0, 1.0, 24, DVec3::ZERO).is_err());
        assert!(create_frustum(1.0, 0.0, 0.0, 24, DVec3::ZERO).is_err());
        assert!(create_frustum(1.0, -1.0, 1.0, 24, DVec3::ZERO).is_err());
        assert!(matches!(
            create_frustum(1.0, 1.0, 1.0, 2, DVec3::ZERO),
            Err(MeshError::InvalidResolution { .. })
        ));
    }
}
