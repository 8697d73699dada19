/// Bounds and bounding area of collections of shapes
pub mod bounds;

/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod translation;

#[doc(inline)]
pub use bounds::{EmptyInputError, bounding_area, union_bounds};

#[doc(inline)]
pub use translation::Translation;
