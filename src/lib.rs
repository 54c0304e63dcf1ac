// src/lib.rs
//! Cairn Scene Kernel
//!
//! The core of a small interactive 3D scene editor: primitive groups are
//! placed onto a grid by a deterministic expanding-ring search, given
//! procedurally built meshes with one randomly colored "special" face, and
//! managed by a single stateful scene container.

pub mod error;
pub mod geometry;
pub mod placement;
pub mod prelude;
pub mod scene;

// Re-export main types for convenience
pub use error::{GeometryError, SceneError};
pub use scene::Scene;

/// Creates an empty scene with a randomly seeded RNG
pub fn default() -> Scene {
    Scene::new()
}
