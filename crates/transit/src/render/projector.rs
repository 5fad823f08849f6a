//! Projection of geographic coordinates onto the map canvas.

use geo::Point;

use super::svg;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Linear projection that fits a set of locations into a padded canvas.
///
/// Longitude grows to the right, latitude grows upwards (so canvas `y`
/// decreases with latitude). The same zoom applies to both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(points: &[Point], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = Self {
            padding,
            ..Self::default()
        };
        if points.is_empty() {
            return projector;
        }

        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_lng = min_lng.min(p.x());
            max_lng = max_lng.max(p.x());
            min_lat = min_lat.min(p.y());
            max_lat = max_lat.max(p.y());
        }
        projector.min_lng = min_lng;
        projector.max_lat = max_lat;

        let width_zoom = (!is_zero(max_lng - min_lng)).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom = (!is_zero(max_lat - min_lat)).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        projector.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };
        projector
    }

    pub fn project(&self, location: Point) -> svg::Point {
        svg::Point::new(
            (location.x() - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - location.y()) * self.zoom + self.padding,
        )
    }
}
