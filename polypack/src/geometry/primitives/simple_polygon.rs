use std::borrow::Borrow;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::Translation;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable, TransformableFrom};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use anyhow::{Result, bail};

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// It is a closed shape with a finite number of vertices and edges.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
///
/// Vertices are always stored in counterclockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct SPolygon {
    /// Set of points that form the polygon
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// Clockwise input is reversed. Self-intersection is not checked, see [`SPolygon::is_simple`].
    /// A degenerate polygon (zero area) is accepted and reports an area of 0.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            bail!("simple polygon must have at least 3 points: {points:?}");
        }

        let area = match SPolygon::calculate_area(&points) {
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };

        let bbox = SPolygon::generate_bounding_box(&points);

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge::new(self.vertices[i], self.vertices[j])
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn generate_bounding_box(points: &[Point]) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    /// Checks whether the closed path through `points` forms a simple polygon:
    /// at least 3 points, no two non-adjacent edges touch, adjacent edges only share their common vertex
    /// and the enclosed area is non-zero.
    pub fn is_simple(points: &[Point]) -> bool {
        let n = points.len();
        if n < 3 || SPolygon::calculate_area(points) == 0.0 {
            return false;
        }
        let edges = (0..n)
            .map(|i| Edge::new(points[i], points[(i + 1) % n]))
            .collect_vec();

        if edges.iter().any(|e| e.start == e.end) {
            return false;
        }

        (0..n).tuple_combinations().all(|(i, j)| {
            let (e_i, e_j) = (&edges[i], &edges[j]);
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match adjacent {
                false => !e_i.collides_with(e_j),
                true => {
                    //only the shared vertex may be in common, the edges should not fold back onto each other
                    let (shared, e_i_other, e_j_other) = match j == i + 1 {
                        true => (e_i.end, e_i.start, e_j.end),
                        false => (e_i.start, e_i.end, e_j.start),
                    };
                    debug_assert!(shared == e_j.start || shared == e_j.end);
                    !e_i.collides_with(&e_j_other) && !e_j.collides_with(&e_i_other)
                }
            }
        })
    }

    /// Position of `point` relative to the closed polygon.
    pub fn position_of(&self, point: &Point) -> GeoPosition {
        if !self.bbox.collides_with(point) {
            return GeoPosition::Exterior;
        }
        if self.edge_iter().any(|edge| edge.collides_with(point)) {
            return GeoPosition::Boundary;
        }

        //crossing number of a horizontal ray shot to the right
        //https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        let Point(p_x, p_y) = *point;
        let mut inside = false;
        for edge in self.edge_iter() {
            let (Point(s_x, s_y), Point(e_x, e_y)) = (edge.start, edge.end);
            if (s_y > p_y) != (e_y > p_y) {
                let x_cross = s_x + (p_y - s_y) * (e_x - s_x) / (e_y - s_y);
                if p_x < x_cross {
                    inside = !inside;
                }
            }
        }

        match inside {
            true => GeoPosition::Interior,
            false => GeoPosition::Exterior,
        }
    }

    /// Checks whether any part of `self`'s boundary passes through the interior of `other`.
    ///
    /// Every edge is cut at the vertices of `other` lying on it. Provided no edges cross properly,
    /// each resulting piece is either inside, outside or on the boundary of `other` as a whole,
    /// so testing its midpoint suffices.
    fn boundary_enters(&self, other: &SPolygon) -> bool {
        self.edge_iter()
            .filter(|edge| {
                let edge_bbox = SPolygon::generate_bounding_box(&[edge.start, edge.end]);
                edge_bbox.collides_with(&other.bbox)
            })
            .any(|edge| {
                other
                    .vertices
                    .iter()
                    .filter_map(|v| edge.interior_param_of(v))
                    .chain([0.0, 1.0])
                    .sorted_by_key(|t| OrderedFloat(*t))
                    .tuple_windows()
                    .any(|(t_0, t_1)| {
                        let mid = edge.point_at((t_0 + t_1) / 2.0);
                        other.position_of(&mid) == GeoPosition::Interior
                    })
            })
    }
}

impl Shape for SPolygon {
    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Translation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            bbox,
            area: _,
        } = self;

        vertices.iter_mut().for_each(|v| {
            v.transform(t);
        });

        //regenerate bounding box
        *bbox = SPolygon::generate_bounding_box(vertices);

        self
    }
}

impl TransformableFrom for SPolygon {
    fn transform_from(&mut self, reference: &Self, t: &Translation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            bbox,
            area: _,
        } = self;

        for (v, ref_v) in vertices.iter_mut().zip(&reference.vertices) {
            v.transform_from(ref_v, t);
        }

        //regenerate bounding box
        *bbox = SPolygon::generate_bounding_box(vertices);

        self
    }
}

impl CollidesWith<Point> for SPolygon {
    /// True if `point` lies in the interior or on the boundary
    fn collides_with(&self, point: &Point) -> bool {
        self.position_of(point) != GeoPosition::Exterior
    }
}

impl CollidesWith<SPolygon> for SPolygon {
    /// True if the interiors of both polygons overlap with positive area.
    /// Sharing (parts of) edges or touching in a single point is not a collision.
    fn collides_with(&self, other: &SPolygon) -> bool {
        //degenerate polygons have no interior
        if self.area == 0.0 || other.area == 0.0 {
            return false;
        }
        //fail fast: the bounding boxes have to overlap with positive area
        if Rect::intersection(self.bbox, other.bbox).is_none() {
            return false;
        }

        for e_s in self.edge_iter() {
            for e_o in other.edge_iter() {
                if e_s.crosses(&e_o) || e_s.runs_along(&e_o) {
                    return true;
                }
            }
        }

        //no proper crossings, one boundary can now only enter the other's interior as a whole piece
        self.boundary_enters(other) || other.boundary_enters(self)
    }
}

impl<T> From<T> for SPolygon
where
    T: Borrow<Rect>,
{
    fn from(r: T) -> Self {
        let r = r.borrow();
        let [c0, c1, c2, c3] = r.corners();
        SPolygon {
            vertices: vec![c0, c1, c2, c3],
            bbox: *r,
            area: r.area(),
        }
    }
}
