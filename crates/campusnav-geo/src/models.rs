use campusnav_core::models::Coordinate;
use geo::Point;

/// Convert a coordinate to a `geo` point (x = longitude, y = latitude)
pub fn to_point(coord: Coordinate) -> Point<f64> {
    Point::new(coord.lon, coord.lat)
}
