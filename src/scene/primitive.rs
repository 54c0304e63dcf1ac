//! Placed primitive instances and add-group request parameters.

use std::fmt;
use std::sync::Arc;

use cgmath::Vector3;

use crate::error::GeometryError;
use crate::geometry::{MeshData, PrimitiveKind, Rgb};
use crate::placement::{cell_to_world, GridCell};

/// Opaque unique identifier of a placed primitive.
///
/// Ids are allocated from a monotonically increasing per-scene counter and
/// are never reused within a scene's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub(crate) u64);

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Length, width, and height of a primitive. All components must be
/// strictly positive; see [`Dimensions::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Extent along X
    pub length: f32,
    /// Extent along Z
    pub width: f32,
    /// Extent along Y
    pub height: f32,
}

impl Dimensions {
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Rejects zero, negative, and NaN components.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !(value > 0.0) {
                return Err(GeometryError::NonPositiveDimension { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Dimensions {
    /// The 1 x 1 x 1 unit shape offered by the add-group form.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// An add-group request: place `count` primitives of one kind and size.
#[derive(Debug, Clone, Copy)]
pub struct GroupParams {
    pub kind: PrimitiveKind,
    pub dimensions: Dimensions,
    pub count: usize,
}

impl GroupParams {
    pub fn new(kind: PrimitiveKind, dimensions: Dimensions, count: usize) -> Self {
        Self {
            kind,
            dimensions,
            count,
        }
    }
}

impl Default for GroupParams {
    /// One unit box, matching the add-group form defaults.
    fn default() -> Self {
        Self::new(PrimitiveKind::Box, Dimensions::default(), 1)
    }
}

/// A single placed 3D shape instance.
///
/// The geometry is built once at placement time and never mutated
/// afterwards; it is shared behind an `Arc` so copy-on-write list updates
/// and draw-list snapshots stay cheap. Only the `selected` flag changes
/// after construction, and only through wholesale list replacement in
/// [`Scene`](super::Scene).
#[derive(Debug, Clone)]
pub struct Primitive {
    pub id: PrimitiveId,
    pub kind: PrimitiveKind,
    /// Grid cell this primitive occupies (y is always 0 for placement)
    pub cell: GridCell,
    pub dimensions: Dimensions,
    /// Swatch color shown next to the primitive in the list view
    pub color: Rgb,
    pub selected: bool,
    geometry: Arc<MeshData>,
}

impl Primitive {
    pub(crate) fn new(
        id: PrimitiveId,
        kind: PrimitiveKind,
        cell: GridCell,
        dimensions: Dimensions,
        color: Rgb,
        geometry: MeshData,
    ) -> Self {
        Self {
            id,
            kind,
            cell,
            dimensions,
            color,
            selected: false,
            geometry: Arc::new(geometry),
        }
    }

    /// The mesh built for this primitive.
    pub fn geometry(&self) -> &MeshData {
        &self.geometry
    }

    pub(crate) fn share_geometry(&self) -> Arc<MeshData> {
        Arc::clone(&self.geometry)
    }

    /// World-space placement position on the ground plane (y = 0).
    pub fn world_position(&self) -> Vector3<f32> {
        cell_to_world(self.cell)
    }

    /// World-space position for draw submission: the mesh is lifted by half
    /// its height so it sits on the ground plane.
    pub fn render_position(&self) -> Vector3<f32> {
        let mut position = self.world_position();
        position.y = self.dimensions.height * 0.5;
        position
    }
}
