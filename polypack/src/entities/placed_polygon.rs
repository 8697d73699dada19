use std::sync::Arc;

use crate::entities::Item;
use crate::geometry::Translation;
use crate::geometry::geo_traits::{Transformable, TransformableFrom};
use crate::geometry::primitives::{Point, SPolygon};

#[cfg(doc)]
use crate::entities::Layout;

/// Represents an [`Item`] that has been placed in a [`Layout`]
#[derive(Clone, Debug)]
pub struct PlacedPolygon {
    /// ID of the `Item` that was placed
    pub item_id: usize,
    /// Contour of the `Item` before translation
    source: Arc<SPolygon>,
    /// The translation that was applied to the `Item` before it was placed
    offset: Translation,
    /// The shape of the `Item` after it has been translated, always derived from `source` and `offset`
    shape: SPolygon,
}

impl PlacedPolygon {
    pub fn new(item: &Item, offset: Translation) -> Self {
        let shape = item.shape.transform_clone(&offset);
        PlacedPolygon {
            item_id: item.id,
            source: item.shape.clone(),
            offset,
            shape,
        }
    }

    pub fn offset(&self) -> Translation {
        self.offset
    }

    /// The absolute shape, as it lies in the layout
    pub fn shape(&self) -> &SPolygon {
        &self.shape
    }

    /// The absolute boundary vertices, as they lie in the layout
    pub fn vertices(&self) -> &[Point] {
        &self.shape.vertices
    }

    pub fn source(&self) -> &SPolygon {
        &self.source
    }

    /// Moves the polygon by an additional `(dx, dy)` on top of its current offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let offset = self.offset.compose(&Translation::new(dx, dy));
        self.set_offset(offset);
    }

    /// Replaces the offset, the shape is re-derived from the source so no error accumulates over moves.
    pub fn set_offset(&mut self, offset: Translation) {
        self.offset = offset;
        self.shape.transform_from(&self.source, &offset);
    }
}
