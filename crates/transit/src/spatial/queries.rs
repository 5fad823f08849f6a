//! Great-circle distance calculations.
//!
//! Uses the Haversine formula for distances on the Earth's surface. Road
//! distances are always recorded explicitly; these values only serve as the
//! "straight line" reference for curvature.

use geo::{HaversineDistance, Point};

/// Haversine distance between two points in meters
pub fn great_circle_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Sum of great-circle distances between consecutive points
pub fn great_circle_length(points: impl IntoIterator<Item = Point>) -> f64 {
    let mut points = points.into_iter();
    let Some(mut previous) = points.next() else {
        return 0.0;
    };

    let mut total = 0.0;
    for point in points {
        total += great_circle_distance(previous, point);
        previous = point;
    }
    total
}
