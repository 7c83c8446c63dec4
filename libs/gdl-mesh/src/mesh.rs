//! # Mesh Data Structure
//!
//! Named triangle meshes, wireframe polylines, and the `Shape` pair a
//! primitive builder returns.

use crate::error::MeshError;
use glam::DVec3;
use serde::Serialize;

/// A wireframe polyline. Closed loops repeat their first point at the end.
pub type Wire = Vec<DVec3>;

/// A named triangle mesh.
///
/// All geometry calculations use f64. Conversion to f32 only happens when a
/// GPU buffer is requested.
///
/// Serializes as [`MeshBuffers`], the split-column layout the editor's
/// plotting surface consumes.
///
/// # Example
///
/// ```rust
/// use gdl_mesh::Mesh3D;
/// use glam::DVec3;
///
/// let mut mesh = Mesh3D::new("TRI");
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.i(), vec![0]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "MeshBuffers")]
pub struct Mesh3D {
    /// Producing command keyword, e.g. `BLOCK`.
    name: String,
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh3D {
    /// Creates an empty mesh.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0, 0)
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(name: impl Into<String>, vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the mesh name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the mesh name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or two zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Reverses the orientation of every triangle.
    pub fn flip_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    /// Checks that every triangle index refers to an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // BUFFERS
    // =========================================================================

    /// X coordinate column.
    pub fn x(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.x).collect()
    }

    /// Y coordinate column.
    pub fn y(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.y).collect()
    }

    /// Z coordinate column.
    pub fn z(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.z).collect()
    }

    /// First-corner index column.
    pub fn i(&self) -> Vec<u32> {
        self.triangles.iter().map(|t| t[0]).collect()
    }

    /// Second-corner index column.
    pub fn j(&self) -> Vec<u32> {
        self.triangles.iter().map(|t| t[1]).collect()
    }

    /// Third-corner index column.
    pub fn k(&self) -> Vec<u32> {
        self.triangles.iter().map(|t| t[2]).collect()
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// Split-column mesh layout: one array per coordinate and per triangle
/// corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshBuffers {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
}

impl From<Mesh3D> for MeshBuffers {
    fn from(mesh: Mesh3D) -> Self {
        Self {
            x: mesh.x(),
            y: mesh.y(),
            z: mesh.z(),
            i: mesh.i(),
            j: mesh.j(),
            k: mesh.k(),
            name: mesh.name,
        }
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// Output of a primitive builder: one mesh plus its wireframe edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub mesh: Mesh3D,
    pub wires: Vec<Wire>,
}

impl Shape {
    /// Pairs a mesh with wires taken from its own vertices.
    ///
    /// Each entry of `polylines` is a list of vertex indices.
    pub(crate) fn from_polylines<I, P>(mesh: Mesh3D, polylines: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = u32>,
    {
        let vertices = mesh.vertices();
        let wires = polylines
            .into_iter()
            .map(|line| line.into_iter().map(|i| vertices[i as usize]).collect())
            .collect();
        Self { mesh, wires }
    }

    /// Translates the mesh and all wires by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        self.mesh.translate(offset);
        for wire in &mut self.wires {
            for point in wire {
                *point += offset;
            }
        }
    }

    /// Returns the shape moved to `origin`.
    pub(crate) fn placed_at(mut self, origin: DVec3) -> Self {
        self.translate(origin);
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
