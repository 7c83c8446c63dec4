//! # Sphere Primitive
//!
//! Latitude/longitude sphere tessellation.

use super::ring_point;
use crate::error::MeshError;
use crate::mesh::{Mesh3D, Shape, Wire};
use config::constants::DEGENERATE_EPSILON;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere centered on `origin`.
///
/// Rings run from the south pole (`la = 0`) to the north pole
/// (`la = lat_steps`), each with `lon_steps` vertices. The pole rings
/// collapse to a point, so their triangles have zero area.
///
/// # Returns
///
/// `(lat_steps + 1) * lon_steps` vertices, `2 * lat_steps * lon_steps`
/// triangles and a single closed equator wire.
///
/// # Example
///
/// ```rust
/// use gdl_mesh::primitives::create_sphere;
/// use glam::DVec3;
///
/// let shape = create_sphere(1.0, 10, 20, DVec3::ZERO).unwrap();
/// assert_eq!(shape.mesh.vertex_count(), 220);
/// assert_eq!(shape.mesh.triangle_count(), 400);
/// assert_eq!(shape.wires.len(), 1);
/// ```
pub fn create_sphere(
    radius: f64,
    lat_steps: u32,
    lon_steps: u32,
    origin: DVec3,
) -> Result<Shape, MeshError> {
    MeshError::check_resolution("lat_steps", lat_steps, 2)?;
    MeshError::check_resolution("lon_steps", lon_steps, 3)?;

    if radius <= DEGENERATE_EPSILON {
        return Err(MeshError::degenerate(format!(
            "sphere radius must be positive: {radius}"
        )));
    }

    let vertex_count = (lat_steps as usize + 1) * lon_steps as usize;
    let triangle_count = 2 * lat_steps as usize * lon_steps as usize;
    let mut mesh = Mesh3D::with_capacity("SPHERE", vertex_count, triangle_count);

    for la in 0..=lat_steps {
        let phi = -PI / 2.0 + PI * f64::from(la) / f64::from(lat_steps);
        let (sp, cp) = phi.sin_cos();
        for lo in 0..lon_steps {
            let (cos, sin) = ring_point(lo, lon_steps);
            mesh.add_vertex(DVec3::new(radius * cp * cos, radius * cp * sin, radius * sp));
        }
    }

    let vid = |la: u32, lo: u32| la * lon_steps + lo % lon_steps;
    for la in 0..lat_steps {
        for lo in 0..lon_steps {
            let a = vid(la, lo);
            let b = vid(la, lo + 1);
            let c = vid(la + 1, lo + 1);
            let d = vid(la + 1, lo);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(a, c, d);
        }
    }

    let mut equator: Wire = (0..lon_steps)
        .map(|t| {
            let (cos, sin) = ring_point(t, lon_steps);
            DVec3::new(radius * cos, radius * sin, 0.0)
        })
        .collect();
    equator.push(equator[0]);

    let mut shape = Shape {
        mesh,
        wires: vec![equator],
    };
    shape.translate(origin);
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_counts() {
        let shape = create_sphere(2.0, 10, 20, DVec3::ZERO).unwrap();
        assert_eq!(shape.mesh.vertex_count(), 11 * 20);
        assert_eq!(shape.mesh.triangle_count(), 2 * 10 * 20);
        assert!(shape.mesh.validate().is_ok());
    }

    #[test]
    fn test_vertices_on_surface() {
        let center = DVec3::new(1.0, -2.0, 0.5);
        let shape = create_sphere(2.0, 10, 20, center).unwrap();
        for v in shape.mesh.vertices() {
            assert_relative_eq!((*v - center).length(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_poles() {
        let shape = create_sphere(1.0, 4, 6, DVec3::ZERO).unwrap();
        let (min, max) = shape.mesh.bounding_box();
        assert_relative_eq!(min.z, -1.0);
        assert_relative_eq!(max.z, 1.0);
    }

    #[test]
    fn test_equator_wire_closed() {
        let shape = create_sphere(1.0, 10, 20, DVec3::new(0.0, 0.0, 3.0)).unwrap();
        let wire = &shape.wires[0];
        assert_eq!(wire.len(), 21);
        assert_eq!(wire[0], wire[20]);
        assert!(wire.iter().all(|p| p.z == 3.0));
    }

    #[test]
    fn test_zero_radius_rejected() {
        assert!(create_sphere(0.0, 10, 20, DVec3::ZERO).is_err());
    }

    #[test]
    fn test_resolution_checked() {
        assert!(create_sphere(1.0, 1, 20, DVec3::ZERO).is_err());
        assert!(create_sphere(1.0, 10, 2, DVec3::ZERO).is_err());
    }
}
