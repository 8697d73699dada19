//! Greedy grid Search + stochastic Refinement (GSR) packer for irregular polygons.
//!
//! Polygons are first placed one by one at the first collision-free offset of a uniform grid
//! over the canvas, after which a hill-climber translates random polygons around, keeping only
//! moves that strictly shrink the bounding box of the layout without causing overlap.

use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod generator;
pub mod io;
pub mod opt;
pub mod samplers;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
