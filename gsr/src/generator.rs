use std::f64::consts::TAU;

use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use log::debug;
use polypack::geometry::primitives::{Point, SPolygon};
use rand::Rng;

/// Number of draws after which the generator gives up on finding a simple polygon
pub const MAX_ATTEMPTS: usize = 1000;

/// Generates an irregular simple polygon by perturbing the vertices of a regular polygon,
/// inscribed in the unit circle and centered at the origin.
///
/// Each vertex is moved radially by a factor drawn uniformly from `[1 - perturb_strength, 1 + perturb_strength)`.
/// Draws are repeated until the result is simple.
pub fn generate_irregular_polygon(
    n_vertices: usize,
    perturb_strength: f64,
    rng: &mut impl Rng,
) -> Result<SPolygon> {
    ensure!(n_vertices >= 3, "polygons need at least 3 vertices");
    ensure!(
        (0.0..1.0).contains(&perturb_strength),
        "perturb strength should lie in [0, 1), got {perturb_strength}"
    );

    for attempt in 0..MAX_ATTEMPTS {
        let points = (0..n_vertices)
            .map(|i| {
                let t = TAU * i as f64 / n_vertices as f64;
                let perturb = 1.0 + perturb_strength * (2.0 * rng.random::<f64>() - 1.0);
                Point(t.cos() * perturb, t.sin() * perturb)
            })
            .collect_vec();

        if SPolygon::is_simple(&points) {
            return SPolygon::new(points);
        }
        debug!("[GEN] attempt {attempt} produced a non-simple polygon, retrying");
    }
    bail!("no simple polygon found after {MAX_ATTEMPTS} attempts")
}
