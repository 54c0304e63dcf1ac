//! # Procedural Geometry Generation
//!
//! This module builds the meshes for every primitive the editor can place.
//! Shapes are generated with per-vertex colors so that a single randomly
//! chosen face can stand out from the rest of the shape.
//!
//! ## Supported Primitives
//!
//! - **Box**: axis-aligned box, 6 quad faces, 24 vertices
//! - **Pyramid**: square-based pyramid, 6 triangles, 18 unshared vertices
//!
//! ## Usage
//!
//! ```
//! use cairn::geometry::{generate_primitive, PrimitiveKind};
//!
//! let mut rng = rand::rng();
//! let mesh = generate_primitive(PrimitiveKind::Box, 1.0, 1.0, 1.0, &mut rng).unwrap();
//! assert_eq!(mesh.vertex_count(), 24);
//! ```

pub mod palette;
pub mod primitives;
pub mod vertex;

pub use palette::{hex_to_rgb, rgb_to_hex, Rgb, PALETTE};
pub use primitives::{generate_box, generate_primitive, generate_pyramid, PrimitiveKind};
pub use vertex::ColorVertex;

/// Generated mesh buffers ready for draw submission.
///
/// The position and color buffers are index-aligned: exactly one color entry
/// per vertex. Meshes are never mutated after construction; regenerating a
/// primitive means building a fresh `MeshData`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex RGB colors, aligned index-for-index with `positions`
    pub colors: Vec<Rgb>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaves the position and color buffers into GPU-ready vertices.
    ///
    /// Returns the vertex buffer together with the (cloned) index buffer so
    /// the pair can be uploaded as-is by a rendering layer.
    pub fn to_vertex_buffer(&self) -> (Vec<ColorVertex>, Vec<u32>) {
        debug_assert_eq!(self.positions.len(), self.colors.len());

        let vertices: Vec<ColorVertex> = self
            .positions
            .iter()
            .zip(self.colors.iter())
            .map(|(&position, &color)| ColorVertex { position, color })
            .collect();

        (vertices, self.indices.clone())
    }
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new()
    }
}
