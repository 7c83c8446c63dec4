//! # GDL Mesh
//!
//! Mesh generation for the solids a GDL 3D script can place.
//!
//! ## Architecture
//!
//! ```text
//! gdl-preview (3D dispatcher) → gdl-mesh (Shape = Mesh3D + wires)
//! ```
//!
//! Every builder is a pure function of its dimensions and the origin it is
//! placed at. Builders that can receive unusable input (too few polygon
//! points, zero radius or height) return [`MeshError`]; callers decide
//! whether that is fatal.
//!
//! ## Usage
//!
//! ```rust
//! use gdl_mesh::primitives::create_block;
//! use glam::DVec3;
//!
//! let shape = create_block(DVec3::new(1.0, 2.0, 3.0), DVec3::ZERO);
//! assert_eq!(shape.mesh.vertex_count(), 8);
//! assert_eq!(shape.mesh.triangle_count(), 12);
//! assert_eq!(shape.wires.len(), 12);
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{Mesh3D, MeshBuffers, Shape, Wire};
