use crate::entities::{Item, PlacedPolygon};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Rect, SPolygon};
use crate::geometry::{EmptyInputError, Translation, bounding_area, union_bounds};
use crate::util::assertions;

/// A [`Layout`] is an ordered collection of polygons that have been placed at specific positions.
/// Members are addressed by index, which equals their placement order and never changes.
/// Polygons are only ever added, afterwards only their offsets are modified.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    placed: Vec<PlacedPolygon>,
}

impl Layout {
    pub fn new() -> Self {
        Layout { placed: vec![] }
    }

    /// Places an item in the layout with a specific offset and returns its index.
    pub fn place_item(&mut self, item: &Item, offset: Translation) -> usize {
        self.placed.push(PlacedPolygon::new(item, offset));

        debug_assert!(assertions::layout_is_feasible(self));

        self.placed.len() - 1
    }

    pub fn placed(&self) -> &[PlacedPolygon] {
        &self.placed
    }

    pub fn get(&self, idx: usize) -> Option<&PlacedPolygon> {
        self.placed.get(idx)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &SPolygon> {
        self.placed.iter().map(|pp| pp.shape())
    }

    /// Axis-aligned rectangle enclosing all placed polygons.
    pub fn bbox(&self) -> Result<Rect, EmptyInputError> {
        union_bounds(self.shapes())
    }

    /// Area of [`Layout::bbox`], zero for an empty layout.
    pub fn bounding_area(&self) -> f64 {
        bounding_area(self.shapes())
    }

    /// Checks whether `shape` overlaps any of the placed polygons, optionally ignoring the one at index `ignored`.
    pub fn collides(&self, shape: &SPolygon, ignored: Option<usize>) -> bool {
        self.placed
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != ignored)
            .any(|(_, pp)| pp.shape().collides_with(shape))
    }

    /// Checks whether the polygon at index `idx` overlaps any of the other placed polygons.
    pub fn member_collides(&self, idx: usize) -> bool {
        self.collides(self.placed[idx].shape(), Some(idx))
    }

    /// Moves the polygon at index `idx` by an additional `(dx, dy)`.
    /// Returns its previous offset, which can be handed to [`Layout::restore_offset`] to undo the move.
    pub fn translate_member(&mut self, idx: usize, dx: f64, dy: f64) -> Translation {
        let pp = &mut self.placed[idx];
        let old_offset = pp.offset();
        pp.translate(dx, dy);
        old_offset
    }

    /// Puts the polygon at index `idx` back at `offset`.
    pub fn restore_offset(&mut self, idx: usize, offset: Translation) {
        self.placed[idx].set_offset(offset);
    }
}
