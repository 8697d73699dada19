use itertools::Itertools;
use log::error;

use crate::entities::Layout;
use crate::geometry::geo_traits::{CollidesWith, Transformable};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// No two distinct members of the layout overlap.
pub fn layout_is_feasible(layout: &Layout) -> bool {
    for ((i, pp_1), (j, pp_2)) in layout.placed().iter().enumerate().tuple_combinations() {
        if pp_1.shape().collides_with(pp_2.shape()) {
            error!(
                "placed polygons {i} (item {}) and {j} (item {}) overlap",
                pp_1.item_id, pp_2.item_id
            );
            return false;
        }
    }
    true
}

/// Every member's absolute shape equals its source shape translated by its offset.
pub fn shapes_match_offsets(layout: &Layout) -> bool {
    layout.placed().iter().all(|pp| {
        let expected = pp.source().transform_clone(&pp.offset());
        let matches = &expected == pp.shape();
        if !matches {
            error!("shape of item {} deviates from its offset {}", pp.item_id, pp.offset());
        }
        matches
    })
}
