use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use polypack::entities::{Canvas, Item, Layout};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::config::PackingConfig;
use crate::generator::generate_irregular_polygon;
use crate::opt::placement::{GridPlacer, PlacementReport};
use crate::opt::refinement::{HillClimber, RefinementReport};

/// Drives a complete packing run: generation, greedy placement and refinement.
pub struct PackingSession {
    pub config: PackingConfig,
    pub canvas: Canvas,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

/// Final layout of a session together with some statistics
#[derive(Debug, Clone)]
pub struct PackingSolution {
    pub layout: Layout,
    pub report: SessionReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub n_requested: usize,
    pub n_placed: usize,
    /// Bounding area after the greedy placement
    pub initial_area: f64,
    /// Bounding area after refinement
    pub final_area: f64,
    pub placement: PlacementReport,
    pub refinement: RefinementReport,
    pub elapsed_ms: f64,
}

impl PackingSession {
    pub fn new(config: PackingConfig, rng: SmallRng) -> Result<Self> {
        config.validate().context("invalid packing config")?;
        let canvas = Canvas::square(config.canvas_size)?;
        Ok(Self {
            config,
            canvas,
            rng,
        })
    }

    /// Creates a session seeded from `config.prng_seed`, or from OS entropy if absent.
    pub fn from_config(config: PackingConfig) -> Result<Self> {
        let rng = match config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::new(config, rng)
    }

    /// Generates `polygon_count` irregular polygons using the session's PRNG.
    pub fn generate_items(&mut self) -> Result<Vec<Item>> {
        (0..self.config.polygon_count)
            .map(|id| {
                let shape = generate_irregular_polygon(
                    self.config.vertices_per_polygon,
                    self.config.perturb_strength,
                    &mut self.rng,
                )?;
                Ok(Item::new(id, shape))
            })
            .collect()
    }

    /// Generates the polygons and packs them.
    pub fn solve(&mut self) -> Result<PackingSolution> {
        let items = self.generate_items()?;
        Ok(self.solve_items(&items))
    }

    /// Packs the given polygons, in the given order.
    pub fn solve_items(&mut self, items: &[Item]) -> PackingSolution {
        let start = Instant::now();

        let placer = GridPlacer::new(self.canvas, self.config.grid_resolution);
        let (layout, placement) = placer.place(items);
        let initial_area = layout.bounding_area();

        let climber = HillClimber::new(self.config.max_shift);
        let (layout, refinement) = climber.refine(layout, self.config.iterations, &mut self.rng);
        let final_area = layout.bounding_area();

        let report = SessionReport {
            n_requested: items.len(),
            n_placed: layout.len(),
            initial_area,
            final_area,
            placement,
            refinement,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        info!(
            "[SESSION] packed {}/{} polygons in {:.3}ms, bounding area {:.5} -> {:.5}",
            report.n_placed, report.n_requested, report.elapsed_ms, initial_area, final_area
        );

        PackingSolution { layout, report }
    }
}
