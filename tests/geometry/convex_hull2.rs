use impulse2d::math::{Point, MAX_VERTICES};
use impulse2d::transformation::{convex_hull, ConvexHullError};
use rand::Rng;

#[test]
fn hull_discards_interior_points() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(5.0, 5.0),
        Point::new(5.0, 0.0),
        Point::new(2.0, 2.0),
    ];

    let hull = convex_hull(&points).unwrap();

    // The wrap starts at the rightmost-lowest point and walks counter-clockwise.
    assert_eq!(
        hull,
        vec![
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 5.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn hull_discards_points_interior_to_an_edge() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 2.5), // Lies strictly inside the right edge.
        Point::new(5.0, 5.0),
        Point::new(0.0, 5.0),
    ];

    let hull = convex_hull(&points).unwrap();
    assert_eq!(hull.len(), 4);
    assert!(!hull.contains(&Point::new(5.0, 2.5)));
}

#[test]
fn hull_is_idempotent() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(3.0, -1.0),
        Point::new(4.0, 2.0),
        Point::new(1.0, 3.0),
        Point::new(-1.0, 1.0),
        Point::new(1.0, 1.0),
    ];

    let hull = convex_hull(&points).unwrap();
    let rehull = convex_hull(&hull).unwrap();
    assert_eq!(hull, rehull);
}

#[test]
fn hull_of_random_clouds_is_idempotent() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let points: Vec<_> = (0..30)
            .map(|_| Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();

        let hull = convex_hull(&points).unwrap();
        let rehull = convex_hull(&hull).unwrap();
        assert_eq!(hull, rehull);
    }
}

#[test]
fn hull_rejects_too_few_points() {
    let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    assert_eq!(convex_hull(&points), Err(ConvexHullError::IncompleteInput));
}

#[test]
fn hull_rejects_collinear_points() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(3.0, 3.0),
    ];
    assert_eq!(convex_hull(&points), Err(ConvexHullError::DegenerateInput));
}

#[test]
fn hull_rejects_coincident_points() {
    let points = [Point::origin(); 4];
    assert_eq!(convex_hull(&points), Err(ConvexHullError::DegenerateInput));
}

#[test]
fn hull_rejects_more_vertices_than_the_cap() {
    // Points on a circle are all hull vertices.
    let points: Vec<_> = (0..MAX_VERTICES + 10)
        .map(|i| {
            let angle = i as f32 / (MAX_VERTICES + 10) as f32 * std::f32::consts::TAU;
            Point::new(angle.cos(), angle.sin())
        })
        .collect();

    assert_eq!(convex_hull(&points), Err(ConvexHullError::TooManyVertices));
}

#[test]
fn hull_accepts_exactly_the_vertex_cap() {
    let points: Vec<_> = (0..MAX_VERTICES)
        .map(|i| {
            let angle = i as f32 / MAX_VERTICES as f32 * std::f32::consts::TAU;
            Point::new(angle.cos(), angle.sin())
        })
        .collect();

    let hull = convex_hull(&points).unwrap();
    assert_eq!(hull.len(), MAX_VERTICES);
}
