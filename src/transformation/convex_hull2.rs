use crate::math::{Point, MAX_VERTICES};
use arrayvec::ArrayVec;

/// Errors raised by the 2D convex-hull extraction.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexHullError {
    /// Fewer than 3 points were given to the convex-hull algorithm.
    #[error("less than 3 points were given to the convex-hull algorithm")]
    IncompleteInput,
    /// The input points are all collinear, so no polygon with a nonzero area
    /// encloses them.
    #[error("the input points are degenerate (all collinear)")]
    DegenerateInput,
    /// The hull has more vertices than a convex polygon can store.
    #[error("the convex hull has more than {max} vertices", max = MAX_VERTICES)]
    TooManyVertices,
}

/// Computes the convex hull of a 2D point cloud using gift wrapping
/// (Jarvis march).
///
/// The returned vertices are in counter-clockwise order, starting from the
/// rightmost input point (the lowest one if several share the maximum `x`
/// coordinate). Interior points, as well as points lying strictly inside a
/// hull edge, are discarded.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, ConvexHullError> {
    if points.len() < 3 {
        return Err(ConvexHullError::IncompleteInput);
    }

    // Deterministic seed for the wrap: rightmost point, lowest one on ties.
    let mut seed = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        if pt.x > points[seed].x || (pt.x == points[seed].x && pt.y < points[seed].y) {
            seed = i;
        }
    }

    let mut hull: ArrayVec<usize, MAX_VERTICES> = ArrayVec::new();
    let mut curr = seed;

    loop {
        if hull.try_push(curr).is_err() {
            // Also breaks the walk if floating-point inconsistencies keep it
            // from ever closing the loop.
            log::debug!("Convex hull walk exceeded the {MAX_VERTICES}-vertex capacity.");
            return Err(ConvexHullError::TooManyVertices);
        }

        // Select the next hull vertex: the candidate such that no other point
        // lies to the left of the edge from `curr` to it.
        let mut next = 0;

        for i in 1..points.len() {
            if next == curr {
                next = i;
                continue;
            }

            let e1 = points[next] - points[curr];
            let e2 = points[i] - points[curr];
            let cross = e1.perp(&e2);

            if cross < 0.0 {
                next = i;
            }

            // Exact collinearity: keep the farthest point so that points
            // interior to a hull edge never survive.
            if cross == 0.0 && e2.norm_squared() > e1.norm_squared() {
                next = i;
            }
        }

        if next == seed {
            break;
        }

        curr = next;
    }

    if hull.len() < 3 {
        return Err(ConvexHullError::DegenerateInput);
    }

    Ok(hull.iter().map(|i| points[*i]).collect())
}
