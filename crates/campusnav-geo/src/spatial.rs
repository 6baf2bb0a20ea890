use crate::models::to_point;
use campusnav_core::models::Coordinate;
use geo::{Distance, Geodesic};

/// Geodesic distance between two coordinates in meters, on the WGS 84 ellipsoid.
///
/// Returns NaN if either coordinate is not finite.
pub fn geodesic_distance(a: Coordinate, b: Coordinate) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    Geodesic.distance(to_point(a), to_point(b))
}

/// True when `point` is strictly closer than `threshold_m` meters to `center`
pub fn within_distance(point: Coordinate, center: Coordinate, threshold_m: f64) -> bool {
    // NaN distances and thresholds compare false
    geodesic_distance(point, center) < threshold_m
}

/// True when `point` is strictly closer than `threshold_m` to any of `centers`
pub fn within_distance_of_any(point: Coordinate, centers: &[Coordinate], threshold_m: f64) -> bool {
    centers.iter().any(|center| within_distance(point, *center, threshold_m))
}
