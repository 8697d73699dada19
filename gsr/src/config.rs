use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of a packing session
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PackingConfig {
    /// Number of polygons to generate and place
    pub polygon_count: usize,
    /// Number of vertices of each generated polygon
    pub vertices_per_polygon: usize,
    /// Irregularity of the generated polygons, in [0, 1). 0 yields regular polygons
    pub perturb_strength: f64,
    /// Side length of the square canvas over which the grid search takes place
    pub canvas_size: f64,
    /// Number of candidate offsets per axis during the grid search
    pub grid_resolution: usize,
    /// Maximum displacement per axis of a single refinement move
    pub max_shift: f64,
    /// Number of refinement moves to attempt
    pub iterations: usize,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl PackingConfig {
    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.vertices_per_polygon >= 3,
            "polygons need at least 3 vertices, got {}",
            self.vertices_per_polygon
        );
        ensure!(
            (0.0..1.0).contains(&self.perturb_strength),
            "perturb strength should lie in [0, 1), got {}",
            self.perturb_strength
        );
        ensure!(
            self.canvas_size.is_finite() && self.canvas_size > 0.0,
            "canvas size should be strictly positive, got {}",
            self.canvas_size
        );
        ensure!(
            self.grid_resolution >= 1,
            "grid resolution should be at least 1, got {}",
            self.grid_resolution
        );
        ensure!(
            self.max_shift.is_finite() && self.max_shift >= 0.0,
            "max shift should be non-negative, got {}",
            self.max_shift
        );
        Ok(())
    }
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            polygon_count: 10,
            vertices_per_polygon: 8,
            perturb_strength: 0.3,
            canvas_size: 10.0,
            grid_resolution: 101,
            max_shift: 0.5,
            iterations: 100_000,
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
