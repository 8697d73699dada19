use polypack::entities::Layout;
use serde::{Deserialize, Serialize};

use crate::config::PackingConfig;
use crate::opt::session::{PackingSolution, SessionReport};

/// External representation of a placed polygon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPolygon {
    pub item_id: usize,
    /// Translation applied to the generated polygon
    pub offset: (f64, f64),
    /// Absolute boundary, counterclockwise
    pub vertices: Vec<(f64, f64)>,
}

#[derive(Serialize, Clone, Debug)]
pub struct PackingOutput {
    pub config: PackingConfig,
    pub placed_polygons: Vec<ExtPlacedPolygon>,
    pub report: SessionReport,
}

impl PackingOutput {
    pub fn new(config: PackingConfig, solution: &PackingSolution) -> Self {
        Self {
            config,
            placed_polygons: export_layout(&solution.layout),
            report: solution.report.clone(),
        }
    }
}

pub fn export_layout(layout: &Layout) -> Vec<ExtPlacedPolygon> {
    layout
        .placed()
        .iter()
        .map(|pp| ExtPlacedPolygon {
            item_id: pp.item_id,
            offset: pp.offset().offset(),
            vertices: pp.vertices().iter().map(|&v| v.into()).collect(),
        })
        .collect()
}
