use itertools::Itertools;
use polypack::geometry::Translation;
use polypack::geometry::primitives::Rect;

/// Enumerates translations on a uniform grid over a rectangle.
/// Both ends of each axis are included. The x-axis is the outer loop, the y-axis the inner loop.
#[derive(Clone, Debug)]
pub struct GridSampler {
    pub bbox: Rect,
    /// Number of samples per axis
    pub resolution: usize,
}

impl GridSampler {
    pub fn new(bbox: Rect, resolution: usize) -> Self {
        assert!(resolution > 0, "grid resolution should be at least 1");
        Self { bbox, resolution }
    }

    /// Value of the `i`-th sample on an axis spanning `[min, max]`.
    /// A single sample sits at `min`.
    pub fn axis_sample(&self, min: f64, max: f64, i: usize) -> f64 {
        match self.resolution {
            1 => min,
            n => min + (max - min) * i as f64 / (n - 1) as f64,
        }
    }

    pub fn n_samples(&self) -> usize {
        self.resolution * self.resolution
    }

    pub fn iter(&self) -> impl Iterator<Item = Translation> + '_ {
        let Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        } = self.bbox;
        (0..self.resolution)
            .cartesian_product(0..self.resolution)
            .map(move |(i, j)| {
                Translation::new(
                    self.axis_sample(x_min, x_max, i),
                    self.axis_sample(y_min, y_max, j),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn grid_includes_both_ends_and_scans_x_outer() {
        let sampler = GridSampler::new(Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap(), 101);
        let samples = sampler.iter().map(|t| t.offset()).collect_vec();

        assert_eq!(samples.len(), sampler.n_samples());
        assert_eq!(samples[0], (0.0, 0.0));
        assert_eq!(samples[1], (0.0, 0.1));
        assert_eq!(samples[20], (0.0, 2.0));
        assert_eq!(samples[101], (0.1, 0.0));
        assert_eq!(*samples.last().unwrap(), (10.0, 10.0));
    }

    #[test]
    fn single_sample_sits_in_the_corner() {
        let sampler = GridSampler::new(Rect::try_new(1.0, 2.0, 5.0, 6.0).unwrap(), 1);
        let samples = sampler.iter().map(|t| t.offset()).collect_vec();
        assert_eq!(samples, vec![(1.0, 2.0)]);
    }
}
