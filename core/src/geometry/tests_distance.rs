use super::{ApproxEq, Line, Point};

#[test]
fn test_distance_point_line() {
    // Line from (0,0) to (10,0) [Horizontal on X-axis]
    let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let point = Point::new(5.0, 5.0);

    let d = line.distance_to_point(&point).unwrap();
    assert!((d - 5.0).abs() < 1e-10);
}

#[test]
fn test_distance_point_on_line_is_zero() {
    let line = Line::new(Point::new(100.0, 50.0), Point::new(800.0, 600.0));
    let d = line.distance_to_point(&line.midpoint()).unwrap();
    assert!(d.abs() < 1e-9);
}

#[test]
fn test_distance_vertical_line() {
    // General form keeps vertical lines finite
    let line = Line::new(Point::new(2.0, -1.0), Point::new(2.0, 9.0));
    let d = line.distance_to_point(&Point::new(-3.0, 4.0)).unwrap();
    assert!((d - 5.0).abs() < 1e-10);
}

#[test]
fn test_distance_diagonal_line() {
    // y = x, point (0, 2): distance √2
    let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let d = line.distance_to_point(&Point::new(0.0, 2.0)).unwrap();
    assert!(d.approx_eq(&std::f64::consts::SQRT_2));
}

#[test]
fn test_distance_matches_cross_product_form() {
    let line = Line::new(Point::new(100.0, 50.0), Point::new(800.0, 600.0));
    let p = Point::new(412.0, 377.0);

    let (dx, dy) = (line.end.x - line.start.x, line.end.y - line.start.y);
    let cross = (p.x - line.start.x) * dy - (p.y - line.start.y) * dx;
    let expected = cross.abs() / (dx * dx + dy * dy).sqrt();

    let d = line.distance_to_point(&p).unwrap();
    assert!((d - expected).abs() < 1e-9);
}

#[test]
fn test_degenerate_line_distance_is_nan() {
    let p = Point::new(1.0, 1.0);
    let line = Line::new(p, p);
    assert!(line.distance_to_point(&Point::new(4.0, 5.0)).unwrap().is_nan());
}

#[test]
fn test_segment_distance_inside() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let d = line.segment_distance_to_point(&Point::new(5.0, -3.0)).unwrap();
    assert!((d - 3.0).abs() < 1e-10);
}

#[test]
fn test_segment_distance_beyond_start() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let d = line.segment_distance_to_point(&Point::new(-3.0, 4.0)).unwrap();
    assert!((d - 5.0).abs() < 1e-10);
}

#[test]
fn test_segment_distance_beyond_end() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let d = line.segment_distance_to_point(&Point::new(13.0, -4.0)).unwrap();
    assert!((d - 5.0).abs() < 1e-10);
}

#[test]
fn test_segment_distance_degenerate() {
    let p = Point::new(1.0, 1.0);
    let line = Line::new(p, p);
    let d = line.segment_distance_to_point(&Point::new(4.0, 5.0)).unwrap();
    assert!((d - 5.0).abs() < 1e-10);
}

#[test]
fn test_reflection_preserves_distance() {
    // Reflecting through a point on the line keeps the distance
    let line = Line::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0));
    let p = Point::new(1.0, 3.0);
    let mirrored = p.symmetric_about(&line.midpoint());

    let d1 = line.distance_to_point(&p).unwrap();
    let d2 = line.distance_to_point(&mirrored).unwrap();
    assert!(d1.approx_eq(&d2));
}
