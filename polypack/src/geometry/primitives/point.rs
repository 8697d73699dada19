use std::hash::{Hash, Hasher};

use float_cmp::approx_eq;
use serde::{Deserialize, Serialize};

use crate::geometry::Translation;
use crate::geometry::geo_enums::Orientation;
use crate::geometry::geo_traits::{CollidesWith, Transformable, TransformableFrom};

/// Relative tolerance below which three points are considered collinear.
/// Keeps edges of translated copies that touch from being reported as crossing.
pub const COLLINEAR_TOLERANCE: f64 = 1e-9;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Transformable for Point {
    fn transform(&mut self, t: &Translation) -> &mut Self {
        let (dx, dy) = t.offset();
        self.0 += dx;
        self.1 += dy;
        self
    }
}

impl TransformableFrom for Point {
    fn transform_from(&mut self, reference: &Self, t: &Translation) -> &mut Self {
        let (dx, dy) = t.offset();
        self.0 = reference.0 + dx;
        self.1 = reference.1 + dy;
        self
    }
}

impl Point {
    /// Turn direction of the path `a` -> `b` -> `c`, based on the sign of the 2D cross product.
    /// Near-zero cross products (relative to the magnitude of the vectors involved) count as collinear.
    pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
        let (abx, aby) = (b.0 - a.0, b.1 - a.1);
        let (acx, acy) = (c.0 - a.0, c.1 - a.1);
        let cross = abx * acy - aby * acx;
        let scale = f64::max(1.0, (abx.abs() + aby.abs()) * (acx.abs() + acy.abs()));

        if approx_eq!(f64, cross, 0.0, epsilon = COLLINEAR_TOLERANCE * scale) {
            Orientation::Collinear
        } else if cross > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = self.0.to_bits();
        let y = self.1.to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}
