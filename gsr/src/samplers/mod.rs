pub mod grid_sampler;
pub mod shift_sampler;
