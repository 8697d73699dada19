use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};

/// Fixed search domain of the greedy placement phase.
/// Placed polygons are not confined to it, it only bounds the candidate offsets.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Canvas {
    pub bbox: Rect,
}

impl Canvas {
    /// Square canvas with its lower left corner at the origin.
    pub fn square(size: f64) -> Result<Self> {
        ensure!(
            size.is_finite() && size > 0.0,
            "canvas size should be strictly positive, got {size}"
        );
        Ok(Canvas {
            bbox: Rect::try_new(0.0, 0.0, size, size)?,
        })
    }
}
