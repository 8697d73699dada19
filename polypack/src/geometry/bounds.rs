use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Rect, SPolygon};
use thiserror::Error;

/// Raised when the bounds of zero shapes are requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot compute the bounds of an empty collection of shapes")]
pub struct EmptyInputError;

/// Smallest axis-aligned rectangle enclosing all `shapes`.
pub fn union_bounds<'a>(
    shapes: impl IntoIterator<Item = &'a SPolygon>,
) -> Result<Rect, EmptyInputError> {
    shapes
        .into_iter()
        .map(|s| s.bbox())
        .reduce(Rect::bounding_rect)
        .ok_or(EmptyInputError)
}

/// Area of [`union_bounds`], zero for an empty collection.
pub fn bounding_area<'a>(shapes: impl IntoIterator<Item = &'a SPolygon>) -> f64 {
    union_bounds(shapes).map_or(0.0, |bbox| bbox.area())
}
