//! # Primitives
//!
//! Mesh generation for the solids of the 3D script subset.
//!
//! | Builder | Commands |
//! |---------|----------|
//! | [`create_block`] | `BLOCK`, `BRICK` |
//! | [`create_frustum`] | `CYLIND`, `CONE` |
//! | [`create_sphere`] | `SPHERE` |
//! | [`create_prism`] | `PRISM_` |

pub mod block;
pub mod frustum;
pub mod prism;
pub mod sphere;

pub use block::create_block;
pub use frustum::create_frustum;
pub use prism::create_prism;
pub use sphere::create_sphere;

/// Unit circle point at `index / count` of a full turn.
pub(crate) fn ring_point(index: u32, count: u32) -> (f64, f64) {
    let angle = 2.0 * std::f64::consts::PI * f64::from(index) / f64::from(count);
    (angle.cos(), angle.sin())
}
