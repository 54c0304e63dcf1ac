//! # Vertex Data Structures
//!
//! GPU-compatible vertex format for colored primitive meshes.

/// A 3D vertex with position and color data.
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout so vertex buffers can be uploaded to the GPU directly via
/// `bytemuck::cast_slice`.
///
/// # Examples
///
/// ```
/// use cairn::geometry::vertex::ColorVertex;
///
/// let vertex = ColorVertex {
///     position: [0.0, 1.0, 0.0],
///     color: [1.0, 0.0, 0.0],
/// };
/// let bytes: &[u8] = bytemuck::bytes_of(&vertex);
/// assert_eq!(bytes.len(), 24);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// RGB color [r, g, b], components in 0.0..=1.0
    pub color: [f32; 3],
}
