use log::{debug, info};
use polypack::entities::Layout;
use polypack::util::assertions;
use rand::Rng;
use serde::Serialize;
use thousands::Separable;

use crate::samplers::shift_sampler::ShiftSampler;

/// State carried from one refinement step to the next
#[derive(Debug, Clone)]
pub struct RefinementState {
    pub layout: Layout,
    /// Bounding area of `layout`, only ever decreases
    pub best_area: f64,
}

impl RefinementState {
    pub fn new(layout: Layout) -> Self {
        let best_area = layout.bounding_area();
        Self { layout, best_area }
    }
}

/// Result of a single refinement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The move shrank the bounding area without causing overlap and was kept
    Accepted,
    /// The move did not strictly shrink the bounding area and was undone
    NoImprovement,
    /// The move shrank the bounding area but caused overlap and was undone
    Collision,
}

/// Counters of a refinement run
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RefinementReport {
    pub n_iterations: usize,
    pub n_accepted: usize,
    pub n_no_improvement: usize,
    pub n_collision: usize,
    pub initial_area: f64,
    pub final_area: f64,
}

impl RefinementReport {
    fn register(&mut self, outcome: StepOutcome) {
        self.n_iterations += 1;
        match outcome {
            StepOutcome::Accepted => self.n_accepted += 1,
            StepOutcome::NoImprovement => self.n_no_improvement += 1,
            StepOutcome::Collision => self.n_collision += 1,
        }
    }
}

/// Hill-climber which translates one random polygon at a time.
/// Only moves that strictly reduce the bounding area and keep the layout free of overlap are accepted.
pub struct HillClimber {
    pub shift_sampler: ShiftSampler,
}

impl HillClimber {
    pub fn new(max_shift: f64) -> Self {
        Self {
            shift_sampler: ShiftSampler::new(max_shift),
        }
    }

    /// Performs `iterations` refinement steps on `layout`.
    pub fn refine(
        &self,
        layout: Layout,
        iterations: usize,
        rng: &mut impl Rng,
    ) -> (Layout, RefinementReport) {
        let mut state = RefinementState::new(layout);
        let mut report = RefinementReport {
            initial_area: state.best_area,
            final_area: state.best_area,
            ..Default::default()
        };

        if state.layout.is_empty() {
            info!("[REFINE] empty layout, nothing to refine");
            return (state.layout, report);
        }

        for i in 0..iterations {
            let Some(outcome) = self.step(&mut state, rng) else {
                break;
            };
            report.register(outcome);
            if outcome == StepOutcome::Accepted {
                debug!(
                    "[REFINE: {i}/{iterations}] bounding area improved to {:.5}",
                    state.best_area
                );
            }
        }
        report.final_area = state.best_area;

        debug_assert!(assertions::layout_is_feasible(&state.layout));
        debug_assert!(assertions::shapes_match_offsets(&state.layout));

        info!(
            "[REFINE] {} moves accepted out of {} ({} without improvement, {} colliding)",
            report.n_accepted.separate_with_commas(),
            report.n_iterations.separate_with_commas(),
            report.n_no_improvement.separate_with_commas(),
            report.n_collision.separate_with_commas()
        );
        info!(
            "[REFINE] bounding area {:.5} -> {:.5}",
            report.initial_area, report.final_area
        );

        (state.layout, report)
    }

    /// Proposes a random move and either keeps or undoes it.
    /// Returns `None` if the layout is empty.
    ///
    /// Areas are compared exactly, so a move that only lowers the area by rounding error is accepted.
    pub fn step(&self, state: &mut RefinementState, rng: &mut impl Rng) -> Option<StepOutcome> {
        if state.layout.is_empty() {
            return None;
        }

        let idx = rng.random_range(0..state.layout.len());
        let (dx, dy) = self.shift_sampler.sample(rng);

        let old_offset = state.layout.translate_member(idx, dx, dy);
        let new_area = state.layout.bounding_area();

        let outcome = if new_area >= state.best_area {
            StepOutcome::NoImprovement
        } else if state.layout.member_collides(idx) {
            StepOutcome::Collision
        } else {
            StepOutcome::Accepted
        };

        match outcome {
            StepOutcome::Accepted => state.best_area = new_area,
            StepOutcome::NoImprovement | StepOutcome::Collision => {
                state.layout.restore_offset(idx, old_offset)
            }
        }

        Some(outcome)
    }
}
