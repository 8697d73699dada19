/// Greedy grid search placement
pub mod placement;

/// Hill-climbing refinement of a placed layout
pub mod refinement;

/// Sequencing of generation, placement and refinement
pub mod session;
