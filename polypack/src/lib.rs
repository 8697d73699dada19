//! Geometry kernel and layout entities for packing irregular 2D polygons by translation.
//!
//! The optimizer crate builds its placement and refinement engines on top of the exact
//! overlap predicate and the index-addressed [`entities::Layout`] defined here.

/// Entities to model a translation-only packing of irregular polygons
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Helper functions which do not belong to any specific module
pub mod util;
