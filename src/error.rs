//! Error types for scene mutations and geometry construction.

use thiserror::Error;

use crate::scene::PrimitiveId;

/// Errors surfaced by [`Scene`](crate::scene::Scene) operations.
///
/// Every failing operation leaves the scene untouched; add-group in
/// particular is all-or-nothing.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The grid could not supply enough free cells for the requested group.
    #[error("grid full: requested {requested} free cells, only {available} available within the search radius")]
    GridFull { requested: usize, available: usize },

    /// An add-group request asked for zero primitives.
    #[error("group count must be at least 1")]
    InvalidCount,

    /// A select request named a primitive that is not in the scene.
    #[error("no primitive with id {0}")]
    UnknownPrimitive(PrimitiveId),

    /// Geometry construction failed (bad dimensions or palette misconfiguration).
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while building primitive meshes.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A dimension was zero, negative, or NaN. Degenerate geometry is
    /// rejected up front rather than clamped or passed through.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },

    /// The color palette has no two distinct entries, so a special face
    /// color distinct from the base color cannot exist.
    #[error("color palette needs at least two distinct colors")]
    PaletteTooSmall,
}
