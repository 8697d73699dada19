use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use polypack::entities::{Canvas, Item, Layout};
use polypack::geometry::Translation;
use polypack::geometry::geo_traits::{Shape, TransformableFrom};
use serde::Serialize;
use thousands::Separable;

use crate::samplers::grid_sampler::GridSampler;

/// Outcome of a greedy placement pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlacementReport {
    /// Number of candidate offsets that were tested for collisions
    pub n_evaluated: usize,
    /// Ids of the items for which no collision-free offset was found
    pub dropped: Vec<usize>,
}

/// Places items one by one, in the given order, at a collision-free offset on a uniform grid over the canvas.
pub struct GridPlacer {
    pub canvas: Canvas,
    pub grid_resolution: usize,
}

impl GridPlacer {
    pub fn new(canvas: Canvas, grid_resolution: usize) -> Self {
        assert!(grid_resolution > 0, "grid resolution should be at least 1");
        Self {
            canvas,
            grid_resolution,
        }
    }

    /// Builds a layout from scratch. Items for which no feasible offset exists are left out.
    pub fn place(&self, items: &[Item]) -> (Layout, PlacementReport) {
        let mut layout = Layout::new();
        let mut report = PlacementReport::default();

        for item in items {
            match self.search(&layout, item, &mut report.n_evaluated) {
                Some(offset) => {
                    layout.place_item(item, offset);
                    info!(
                        "[GRID] placing item {}/{} with id {} at [{}]",
                        layout.len(),
                        items.len(),
                        item.id,
                        offset
                    );
                }
                None => {
                    warn!(
                        "[GRID] no collision-free offset found for item {}, dropping it",
                        item.id
                    );
                    report.dropped.push(item.id);
                }
            }
        }

        info!(
            "[GRID] placed {}/{} items ({} candidates evaluated)",
            layout.len(),
            items.len(),
            report.n_evaluated.separate_with_commas()
        );

        (layout, report)
    }

    /// Scans the grid for the feasible offset with the smallest area of the translated item.
    ///
    /// Translation preserves area, so every candidate ties and the first feasible offset
    /// in scan order (x outer, y inner) is the one returned.
    /// Candidates which cannot improve on the current best are skipped without being translated.
    pub fn search(
        &self,
        layout: &Layout,
        item: &Item,
        eval_counter: &mut usize,
    ) -> Option<Translation> {
        let sampler = GridSampler::new(self.canvas.bbox, self.grid_resolution);

        //clone of the shape to which the candidate offsets are applied
        let mut buffer = (*item.shape).clone();

        //area of the item at any offset
        let cost = OrderedFloat(item.shape.area());

        let mut best: Option<(Translation, OrderedFloat<f64>)> = None;

        for offset in sampler.iter() {
            //only validate the candidate if it can replace the current best
            let worth_testing = match &best {
                Some((_, best_cost)) => cost < *best_cost,
                None => true,
            };

            if worth_testing {
                *eval_counter += 1;
                buffer.transform_from(&item.shape, &offset);
                if !layout.collides(&buffer, None) {
                    debug!("[GRID] item {} feasible at [{}]", item.id, offset);
                    best = Some((offset, cost));
                }
            }
        }

        best.map(|(offset, _)| offset)
    }
}
