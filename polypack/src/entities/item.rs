use std::sync::Arc;

use crate::geometry::primitives::SPolygon;

/// Polygon to be packed, as supplied by the generator. Never mutated.
#[derive(Clone, Debug)]
pub struct Item {
    /// Position of the polygon in the input sequence
    pub id: usize,
    /// Contour of the polygon, in its own reference frame
    pub shape: Arc<SPolygon>,
}

impl Item {
    pub fn new(id: usize, shape: SPolygon) -> Item {
        Item {
            id,
            shape: Arc::new(shape),
        }
    }
}
