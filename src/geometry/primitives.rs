//! # Primitive Shape Generation
//!
//! This module contains the builders for the two placeable primitive shapes.
//! Each builder assigns per-vertex colors: one uniformly random face (the
//! "special" face) receives a color distinct from the base color covering
//! the rest of the shape.

use rand::Rng;

use super::palette::{pick_color_pair, PALETTE};
use super::MeshData;
use crate::error::GeometryError;

/// Number of quad faces on a box.
const BOX_FACES: usize = 6;
/// Number of triangular side faces on a pyramid.
const PYRAMID_SIDES: usize = 4;

/// The placeable primitive shapes (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Box,
    Pyramid,
}

impl PrimitiveKind {
    /// Human-readable kind name, used as the stem of list labels.
    pub fn label(&self) -> &'static str {
        match self {
            PrimitiveKind::Box => "Box",
            PrimitiveKind::Pyramid => "Pyramid",
        }
    }
}

/// Builds the mesh for a primitive of the given kind and dimensions.
///
/// Dispatches to [`generate_box`] or [`generate_pyramid`]; see those for the
/// exact vertex layouts. Random choices (base color, special color, special
/// face index) are drawn from `rng`.
pub fn generate_primitive<R: Rng>(
    kind: PrimitiveKind,
    length: f32,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Result<MeshData, GeometryError> {
    match kind {
        PrimitiveKind::Box => generate_box(length, width, height, rng),
        PrimitiveKind::Pyramid => generate_pyramid(length, width, height, rng),
    }
}

/// Generate an axis-aligned box centered at the origin.
///
/// Spans `length` along X, `height` along Y, and `width` along Z. The box is
/// decomposed into 6 faces of 4 vertices each (24 vertices total; corner
/// positions repeat across faces) so each face can be colored independently,
/// with 2 counter-clockwise triangles per face. One face, chosen uniformly
/// at random, gets the special color on all 4 of its vertices.
pub fn generate_box<R: Rng>(
    length: f32,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Result<MeshData, GeometryError> {
    let hl = check_dimension("length", length)? * 0.5;
    let hw = check_dimension("width", width)? * 0.5;
    let hh = check_dimension("height", height)? * 0.5;

    let mut data = MeshData::new();

    data.positions = vec![
        // Front face (positive Z)
        [-hl, -hh,  hw], [ hl, -hh,  hw], [ hl,  hh,  hw], [-hl,  hh,  hw],
        // Back face (negative Z)
        [-hl, -hh, -hw], [-hl,  hh, -hw], [ hl,  hh, -hw], [ hl, -hh, -hw],
        // Left face (negative X)
        [-hl, -hh, -hw], [-hl, -hh,  hw], [-hl,  hh,  hw], [-hl,  hh, -hw],
        // Right face (positive X)
        [ hl, -hh,  hw], [ hl, -hh, -hw], [ hl,  hh, -hw], [ hl,  hh,  hw],
        // Top face (positive Y)
        [-hl,  hh,  hw], [ hl,  hh,  hw], [ hl,  hh, -hw], [-hl,  hh, -hw],
        // Bottom face (negative Y)
        [-hl, -hh, -hw], [ hl, -hh, -hw], [ hl, -hh,  hw], [-hl, -hh,  hw],
    ];

    let (base, special) = pick_color_pair(rng, &PALETTE)?;
    let special_face = rng.random_range(0..BOX_FACES);
    for face in 0..BOX_FACES {
        let color = if face == special_face { special } else { base };
        for _ in 0..4 {
            data.colors.push(color);
        }
    }

    // Indices for each face (2 triangles per face, counter-clockwise)
    data.indices = vec![
        // Front face
        0, 1, 2,    2, 3, 0,
        // Back face
        4, 5, 6,    6, 7, 4,
        // Left face
        8, 9, 10,   10, 11, 8,
        // Right face
        12, 13, 14, 14, 15, 12,
        // Top face
        16, 17, 18, 18, 19, 16,
        // Bottom face
        20, 21, 22, 22, 23, 20,
    ];

    Ok(data)
}

/// Generate a square-based pyramid.
///
/// The base is centered at the origin in the local frame with corners at
/// `(±length/2, 0, ±width/2)` and the apex at `(0, height, 0)`. The shape is
/// triangulated as 2 base triangles (`A-B-C`, `A-C-D`) plus one side
/// triangle per base edge (`edge start, apex, edge end`). No vertices are
/// shared between triangles (18 fresh vertex positions), so the base and
/// each side face can be colored independently. Both base triangles take the
/// base color; one of the 4 side faces, chosen uniformly at random, takes
/// the special color.
pub fn generate_pyramid<R: Rng>(
    length: f32,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Result<MeshData, GeometryError> {
    let hl = check_dimension("length", length)? * 0.5;
    let hw = check_dimension("width", width)? * 0.5;
    let height = check_dimension("height", height)?;

    // Base corners on y = 0, apex above the center
    let a = [-hl, 0.0, -hw];
    let b = [hl, 0.0, -hw];
    let c = [hl, 0.0, hw];
    let d = [-hl, 0.0, hw];
    let apex = [0.0, height, 0.0];

    let mut data = MeshData::new();

    data.positions = vec![
        // Base: two triangles (A-B-C and A-C-D)
        a, b, c,
        a, c, d,
        // Side faces: one triangle per base edge
        a, apex, b,
        b, apex, c,
        c, apex, d,
        d, apex, a,
    ];

    let (base_color, special) = pick_color_pair(rng, &PALETTE)?;
    let special_side = rng.random_range(0..PYRAMID_SIDES);

    // Both base triangles share the base color
    data.colors.extend(std::iter::repeat(base_color).take(6));
    for side in 0..PYRAMID_SIDES {
        let color = if side == special_side { special } else { base_color };
        for _ in 0..3 {
            data.colors.push(color);
        }
    }

    // No vertex sharing, so indices are sequential
    data.indices = (0..data.positions.len() as u32).collect();

    Ok(data)
}

fn check_dimension(name: &'static str, value: f32) -> Result<f32, GeometryError> {
    // NaN fails the comparison too
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveDimension { name, value })
    }
}
