#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use polypack::entities::{Item, Layout};
    use polypack::geometry::geo_enums::GeoPosition;
    use polypack::geometry::geo_traits::{CollidesWith, Shape, Transformable, TransformableFrom};
    use polypack::geometry::primitives::{Point, Rect, SPolygon};
    use polypack::geometry::{EmptyInputError, Translation, bounding_area, union_bounds};
    use polypack::util::assertions;
    use test_case::test_case;

    fn polygon(points: &[(f64, f64)]) -> SPolygon {
        SPolygon::new(points.iter().map(|&p| p.into()).collect()).unwrap()
    }

    fn square(x_min: f64, y_min: f64, size: f64) -> SPolygon {
        SPolygon::from(Rect::try_new(x_min, y_min, x_min + size, y_min + size).unwrap())
    }

    /// U-shaped polygon with a 1x2 notch at x in [1, 2], y in [1, 3]
    fn u_shape() -> SPolygon {
        polygon(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ])
    }

    #[test]
    fn clockwise_input_is_reversed() {
        let cw = polygon(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert_eq!(cw.area(), 1.0);
        assert!(SPolygon::calculate_area(&cw.vertices) > 0.0);
    }

    #[test]
    fn too_few_points_is_an_error() {
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0)]).is_err());
    }

    #[test]
    fn area_and_bbox_of_u_shape() {
        let u = u_shape();
        assert_eq!(u.area(), 7.0);
        assert_eq!(u.bbox(), Rect::try_new(0.0, 0.0, 3.0, 3.0).unwrap());
    }

    #[test]
    fn translation_preserves_area() {
        let u = u_shape();
        let moved = u.transform_clone(&Translation::new(2.5, -1.25));
        assert_eq!(moved.area(), u.area());
        assert_eq!(moved.bbox(), Rect::try_new(2.5, -1.25, 5.5, 1.75).unwrap());
    }

    #[test]
    fn transform_from_reference_is_exact() {
        let u = u_shape();
        let mut buffer = u.clone();
        buffer.transform(&Translation::new(0.1, 0.7));
        buffer.transform(&Translation::new(0.3, -0.2));
        buffer.transform_from(&u, &Translation::empty());
        assert_eq!(buffer, u);
    }

    /// Irregular heptagon, vertices at uneven radii and angles
    fn irregular() -> SPolygon {
        polygon(&[
            (1.13, 0.07),
            (0.61, 0.83),
            (-0.29, 1.21),
            (-0.97, 0.44),
            (-0.78, -0.52),
            (-0.11, -1.09),
            (0.88, -0.67),
        ])
    }

    #[test_case(u_shape(), 0.1, -0.7; "u shape, small offsets")]
    #[test_case(u_shape(), 3.3, 1e-3; "u shape, mixed magnitudes")]
    #[test_case(irregular(), 0.1, -0.7; "irregular, small offsets")]
    #[test_case(irregular(), -123.456, 7.89; "irregular, large offsets")]
    fn translation_round_trip(shape: SPolygon, dx: f64, dy: f64) {
        let t = Translation::new(dx, dy);
        let moved = shape.transform_clone(&t);
        let back = moved.transform_clone(&t.inverse());

        assert_eq!(back.n_vertices(), shape.n_vertices());
        for (v, v_ref) in back.vertices.iter().zip(&shape.vertices) {
            assert!(approx_eq!(f64, v.0, v_ref.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, v.1, v_ref.1, epsilon = 1e-9));
        }
        assert!(approx_eq!(f64, back.area(), shape.area(), epsilon = 1e-9));
    }

    #[test]
    fn union_bounds_of_nothing_is_an_error() {
        let shapes: Vec<SPolygon> = vec![];
        assert_eq!(union_bounds(&shapes), Err(EmptyInputError));
        assert_eq!(bounding_area(&shapes), 0.0);
    }

    #[test]
    fn union_bounds_of_disjoint_squares() {
        let shapes = vec![square(0.0, 0.0, 1.0), square(3.0, 2.0, 1.0)];
        assert_eq!(
            union_bounds(&shapes),
            Ok(Rect::try_new(0.0, 0.0, 4.0, 3.0).unwrap())
        );
        assert_eq!(bounding_area(&shapes), 12.0);
    }

    #[test_case((0.5, 0.5), GeoPosition::Interior; "inside")]
    #[test_case((1.5, 2.0), GeoPosition::Exterior; "inside notch")]
    #[test_case((1.5, 1.0), GeoPosition::Boundary; "on notch floor")]
    #[test_case((3.0, 3.0), GeoPosition::Boundary; "on vertex")]
    #[test_case((4.0, 1.0), GeoPosition::Exterior; "outside bbox")]
    fn position_in_u_shape(p: (f64, f64), expected: GeoPosition) {
        assert_eq!(u_shape().position_of(&p.into()), expected);
    }

    #[test_case(square(1.0, 0.0, 1.0); "sharing an edge")]
    #[test_case(square(1.0, 1.0, 1.0); "sharing a corner")]
    #[test_case(square(1.0, 0.5, 1.0); "sharing part of an edge")]
    #[test_case(square(5.0, 5.0, 1.0); "far apart")]
    fn touching_or_disjoint_squares_do_not_collide(other: SPolygon) {
        let unit = square(0.0, 0.0, 1.0);
        assert!(!unit.collides_with(&other));
        assert!(!other.collides_with(&unit));
    }

    #[test_case(square(0.0, 0.0, 1.0); "identical")]
    #[test_case(square(0.5, 0.5, 1.0); "partial overlap")]
    #[test_case(square(0.25, 0.25, 0.5); "contained")]
    #[test_case(square(-1.0, -1.0, 3.0); "containing")]
    #[test_case(square(0.0, 0.5, 1.0); "sliding along an edge")]
    fn overlapping_squares_collide(other: SPolygon) {
        let unit = square(0.0, 0.0, 1.0);
        assert!(unit.collides_with(&other));
        assert!(other.collides_with(&unit));
    }

    #[test_case(polygon(&[(1.0, 1.0), (2.0, 1.0), (2.0, 3.0), (1.0, 3.0)]), false; "filling the notch exactly")]
    #[test_case(polygon(&[(1.0, 1.0), (2.0, 1.0), (2.0, 4.0), (1.0, 4.0)]), false; "sticking out of the notch")]
    #[test_case(polygon(&[(1.25, 1.5), (1.75, 1.5), (1.5, 2.5)]), false; "floating in the notch")]
    #[test_case(polygon(&[(0.5, 1.0), (1.5, 1.0), (1.5, 2.0), (0.5, 2.0)]), true; "biting into an arm")]
    #[test_case(polygon(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]), true; "below the notch")]
    #[test_case(polygon(&[(0.25, 0.25), (0.75, 0.25), (0.5, 0.75)]), true; "inside the material")]
    fn collision_with_non_convex_polygon(other: SPolygon, expected: bool) {
        let u = u_shape();
        assert_eq!(u.collides_with(&other), expected);
        assert_eq!(other.collides_with(&u), expected);
    }

    #[test]
    fn triangle_vertex_on_edge_does_not_collide() {
        let base = square(0.0, 0.0, 2.0);
        //apex touches the middle of the top edge, base sits above it
        let tri = polygon(&[(1.0, 2.0), (2.0, 3.0), (0.0, 3.0)]);
        assert!(!base.collides_with(&tri));
        assert!(!tri.collides_with(&base));
    }

    #[test]
    fn degenerate_polygon_never_collides() {
        let flat = polygon(&[(0.0, 0.5), (0.5, 0.5), (1.0, 0.5)]);
        assert_eq!(flat.area(), 0.0);
        assert!(!flat.collides_with(&square(0.0, 0.0, 1.0)));
        assert!(!square(0.0, 0.0, 1.0).collides_with(&flat));
    }

    #[test_case(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], true; "square")]
    #[test_case(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)], false; "bowtie")]
    #[test_case(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], false; "collinear")]
    #[test_case(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (1.0, 1.0)], false; "folding back")]
    fn simplicity(points: &[(f64, f64)], expected: bool) {
        let points: Vec<Point> = points.iter().map(|&p| p.into()).collect();
        assert_eq!(SPolygon::is_simple(&points), expected);
    }

    #[test]
    fn translation_composes_and_inverts() {
        let t = Translation::new(1.5, -2.0);
        let u = Translation::new(0.5, 1.0);
        assert_eq!(t.compose(&u).offset(), (2.0, -1.0));
        assert!(t.compose(&t.inverse()).is_empty());
    }

    #[test]
    fn layout_translate_and_restore() {
        let mut layout = Layout::new();
        let a = Item::new(0, square(0.0, 0.0, 1.0));
        let b = Item::new(1, square(0.0, 0.0, 1.0));
        layout.place_item(&a, Translation::empty());
        let idx = layout.place_item(&b, Translation::new(2.0, 0.0));
        assert_eq!(layout.bounding_area(), 3.0);

        let before = layout.get(idx).unwrap().shape().clone();
        let old_offset = layout.translate_member(idx, -1.5, 0.25);
        assert!(layout.member_collides(idx));

        layout.restore_offset(idx, old_offset);
        assert!(!layout.member_collides(idx));
        assert_eq!(layout.get(idx).unwrap().shape(), &before);
        assert_eq!(layout.get(idx).unwrap().offset(), Translation::new(2.0, 0.0));
        assert!(assertions::layout_is_feasible(&layout));
        assert!(assertions::shapes_match_offsets(&layout));
    }

    #[test]
    fn empty_layout_has_no_bbox() {
        let layout = Layout::new();
        assert_eq!(layout.bbox(), Err(EmptyInputError));
        assert_eq!(layout.bounding_area(), 0.0);
    }
}
