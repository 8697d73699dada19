use std::fmt::Display;

use ordered_float::NotNan;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
/// Pure translation in the x and y-axis.
/// The only kind of transformation a polygon undergoes while being packed.
pub struct Translation {
    pub dx: NotNan<f64>,
    pub dy: NotNan<f64>,
}

impl Translation {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx: NotNan::new(dx).expect("dx is NaN"),
            dy: NotNan::new(dy).expect("dy is NaN"),
        }
    }

    pub const fn empty() -> Self {
        const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
        Self { dx: _0, dy: _0 }
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.dx.into_inner(), self.dy.into_inner())
    }

    /// Translation equivalent to first applying `self`, followed by `other`.
    pub fn compose(&self, other: &Translation) -> Self {
        Self {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

impl Default for Translation {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "t: ({:.3}, {:.3})",
            self.dx.into_inner(),
            self.dy.into_inner()
        )
    }
}
