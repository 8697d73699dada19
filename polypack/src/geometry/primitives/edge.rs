use crate::geometry::Translation;
use crate::geometry::geo_enums::Orientation;
use crate::geometry::geo_traits::{CollidesWith, Transformable, TransformableFrom};
use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Edge { start, end }
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.start.0, self.end.0)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.start.1, self.end.1)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.start.0, self.end.0)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.start.1, self.end.1)
    }

    pub fn direction(&self) -> (f64, f64) {
        (self.end.0 - self.start.0, self.end.1 - self.start.1)
    }

    /// Point at parameter `t` along the edge, `start` at 0 and `end` at 1.
    pub fn point_at(&self, t: f64) -> Point {
        let (dx, dy) = self.direction();
        Point(self.start.0 + t * dx, self.start.1 + t * dy)
    }

    /// Parameter of the orthogonal projection of `point` onto the line through the edge.
    pub fn project(&self, point: &Point) -> f64 {
        let (dx, dy) = self.direction();
        let sq_len = dx * dx + dy * dy;
        if sq_len == 0.0 {
            return 0.0;
        }
        ((point.0 - self.start.0) * dx + (point.1 - self.start.1) * dy) / sq_len
    }

    /// If `point` lies on the edge strictly between its endpoints, returns its parameter along the edge.
    pub fn interior_param_of(&self, point: &Point) -> Option<f64> {
        match self.collides_with(point) {
            false => None,
            true => {
                let t = self.project(point);
                (FPA(t) > FPA(0.0) && FPA(t) < FPA(1.0)).then_some(t)
            }
        }
    }

    /// True if both edges cross at a single point that lies strictly inside both of them.
    /// Touching at an endpoint or running collinear is not a proper crossing.
    pub fn crosses(&self, other: &Edge) -> bool {
        if !self.bboxes_touch(other) {
            return false;
        }
        let o1 = Point::orientation(self.start, self.end, other.start);
        let o2 = Point::orientation(self.start, self.end, other.end);
        let o3 = Point::orientation(other.start, other.end, self.start);
        let o4 = Point::orientation(other.start, other.end, self.end);

        opposite_sides(o1, o2) && opposite_sides(o3, o4)
    }

    /// True if both edges lie on the same line, share a segment of positive length and point in the same direction.
    ///
    /// For two counterclockwise polygons, such a shared segment has both interiors on the same side.
    pub fn runs_along(&self, other: &Edge) -> bool {
        if !self.bboxes_touch(other)
            || Point::orientation(self.start, self.end, other.start) != Orientation::Collinear
            || Point::orientation(self.start, self.end, other.end) != Orientation::Collinear
        {
            return false;
        }
        let (dx1, dy1) = self.direction();
        let (dx2, dy2) = other.direction();
        if dx1 * dx2 + dy1 * dy2 <= 0.0 {
            return false;
        }

        let t_start = self.project(&other.start);
        let t_end = self.project(&other.end);
        let lo = f64::max(0.0, f64::min(t_start, t_end));
        let hi = f64::min(1.0, f64::max(t_start, t_end));

        FPA(hi) > FPA(lo)
    }

    fn bboxes_touch(&self, other: &Edge) -> bool {
        FPA(f64::max(self.x_min(), other.x_min())) <= FPA(f64::min(self.x_max(), other.x_max()))
            && FPA(f64::max(self.y_min(), other.y_min()))
                <= FPA(f64::min(self.y_max(), other.y_max()))
    }
}

fn opposite_sides(a: Orientation, b: Orientation) -> bool {
    matches!(
        (a, b),
        (Orientation::Clockwise, Orientation::CounterClockwise)
            | (Orientation::CounterClockwise, Orientation::Clockwise)
    )
}

impl Transformable for Edge {
    fn transform(&mut self, t: &Translation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform(t);
        end.transform(t);

        self
    }
}

impl TransformableFrom for Edge {
    fn transform_from(&mut self, reference: &Self, t: &Translation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform_from(&reference.start, t);
        end.transform_from(&reference.end, t);

        self
    }
}

impl CollidesWith<Point> for Edge {
    /// True if `point` lies on the closed edge (within tolerance).
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        FPA(x) >= FPA(self.x_min())
            && FPA(x) <= FPA(self.x_max())
            && FPA(y) >= FPA(self.y_min())
            && FPA(y) <= FPA(self.y_max())
            && Point::orientation(self.start, self.end, *point) == Orientation::Collinear
    }
}

impl CollidesWith<Edge> for Edge {
    /// True if the closed edges share at least one point.
    fn collides_with(&self, other: &Edge) -> bool {
        self.crosses(other)
            || self.collides_with(&other.start)
            || self.collides_with(&other.end)
            || other.collides_with(&self.start)
            || other.collides_with(&self.end)
    }
}
