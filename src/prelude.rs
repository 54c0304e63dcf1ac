//! # Cairn Prelude
//!
//! This module provides a convenient way to import the commonly used types
//! of the scene kernel.
//!
//! ## Usage
//!
//! ```
//! use cairn::prelude::*;
//!
//! let mut scene = cairn::default();
//! let ids = scene
//!     .add_group(&GroupParams::new(PrimitiveKind::Box, Dimensions::default(), 2))
//!     .unwrap();
//! scene.select(ids[0]).unwrap();
//! assert_eq!(scene.len(), 2);
//! ```

// Re-export the scene container and its request/view types
pub use crate::scene::{Dimensions, DrawInstance, GroupParams, ListEntry, Primitive, PrimitiveId, Scene};

// Re-export geometry types and builders
pub use crate::geometry::{
    generate_box, generate_primitive, generate_pyramid, hex_to_rgb, rgb_to_hex, ColorVertex,
    MeshData, PrimitiveKind, Rgb, PALETTE,
};

// Re-export the grid allocator
pub use crate::placement::{
    cell_to_world, find_free_cells, find_free_positions, GridCell, GRID_RADIUS, GRID_STEP,
};

// Re-export error types
pub use crate::error::{GeometryError, SceneError};

pub use crate::default;

// Re-export common external dependencies
pub use cgmath::Vector3;
