//! # Scene Management Module
//!
//! This module holds the live primitive list and mediates between user
//! actions and the placement/geometry algorithms.
//!
//! ## Key Components
//!
//! - [`Scene`] - The main scene container with the three mutating
//!   operations: add-group, select, clear
//! - [`Primitive`] - A single placed shape with identity, grid cell,
//!   dimensions, swatch color, selection flag, and owned geometry
//! - [`GroupParams`] - An add-group request as submitted by a UI layer
//!
//! ## Mutation discipline
//!
//! Every mutation replaces the primitive list wholesale (copy-on-write
//! behind an `Arc`), so a snapshot handed to an observer never changes
//! underneath it.

pub mod primitive;
pub mod scene;

pub use primitive::{Dimensions, GroupParams, Primitive, PrimitiveId};
pub use scene::{DrawInstance, ListEntry, Scene};
